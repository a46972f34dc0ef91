// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in iCalendar RFC 5545 that the codec reads or writes.

// Section 3.3.10 - Recurrence Rule
pub const KW_RRULE_FREQ: &str = "FREQ";
pub const KW_RRULE_FREQ_SECONDLY: &str = "SECONDLY";
pub const KW_RRULE_FREQ_MINUTELY: &str = "MINUTELY";
pub const KW_RRULE_FREQ_HOURLY: &str = "HOURLY";
pub const KW_RRULE_FREQ_DAILY: &str = "DAILY";
pub const KW_RRULE_FREQ_WEEKLY: &str = "WEEKLY";
pub const KW_RRULE_FREQ_MONTHLY: &str = "MONTHLY";
pub const KW_RRULE_FREQ_YEARLY: &str = "YEARLY";
pub const KW_RRULE_UNTIL: &str = "UNTIL";
pub const KW_RRULE_COUNT: &str = "COUNT";
pub const KW_RRULE_INTERVAL: &str = "INTERVAL";
pub const KW_RRULE_BYDAY: &str = "BYDAY";
pub const KW_RRULE_BYMONTHDAY: &str = "BYMONTHDAY";
pub const KW_RRULE_BYMONTH: &str = "BYMONTH";

/// All frequencies RFC 5545 allows in `FREQ`, including the sub-daily ones
/// the editor cannot produce.
pub const RRULE_FREQUENCIES: [&str; 7] = [
    KW_RRULE_FREQ_SECONDLY,
    KW_RRULE_FREQ_MINUTELY,
    KW_RRULE_FREQ_HOURLY,
    KW_RRULE_FREQ_DAILY,
    KW_RRULE_FREQ_WEEKLY,
    KW_RRULE_FREQ_MONTHLY,
    KW_RRULE_FREQ_YEARLY,
];

/// Rule parts the structured editor models.
pub const MODELED_RRULE_PARTS: [&str; 7] = [
    KW_RRULE_FREQ,
    KW_RRULE_INTERVAL,
    KW_RRULE_COUNT,
    KW_RRULE_UNTIL,
    KW_RRULE_BYDAY,
    KW_RRULE_BYMONTHDAY,
    KW_RRULE_BYMONTH,
];
