// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical rule text from a [`RecurrenceConfig`].

use std::fmt::Display;

use crate::datetime;
use crate::keyword::{
    KW_RRULE_BYDAY, KW_RRULE_BYMONTH, KW_RRULE_BYMONTHDAY, KW_RRULE_COUNT, KW_RRULE_FREQ,
    KW_RRULE_INTERVAL, KW_RRULE_UNTIL,
};
use crate::model::{Frequency, RecurrenceConfig, RecurrenceEnd};

/// Generate rule text for a configuration.
///
/// Parts are emitted in a fixed order: `FREQ`, `INTERVAL` (omitted when 1),
/// `COUNT` or `UNTIL`, then the one `BY*` part that belongs to the
/// frequency. Returns an empty string when there is no frequency.
///
/// Values the parser would drop (interval or count of zero, out-of-range
/// days and months, an end date before year 0) are not emitted, so regenerating a parsed rule always
/// reproduces the same text.
///
/// ## Examples
///
/// ```
/// # use aimcal_recur::{Frequency, RecurrenceConfig, Weekday, rrule};
/// let config = RecurrenceConfig::new(Frequency::Weekly)
///     .with_interval(2)
///     .with_count(10)
///     .with_by_day([Weekday::Monday, Weekday::Wednesday, Weekday::Friday]);
/// assert_eq!(
///     rrule::generate(&config),
///     "FREQ=WEEKLY;INTERVAL=2;COUNT=10;BYDAY=MO,WE,FR"
/// );
/// ```
#[must_use]
pub fn generate(config: &RecurrenceConfig) -> String {
    let Some(freq) = config.frequency else {
        return String::new();
    };

    let mut parts = vec![format!("{KW_RRULE_FREQ}={freq}")];

    if config.interval > 1 {
        parts.push(format!("{KW_RRULE_INTERVAL}={}", config.interval));
    }

    match config.end {
        RecurrenceEnd::Count(count) if count > 0 => {
            parts.push(format!("{KW_RRULE_COUNT}={count}"));
        }
        RecurrenceEnd::Until(until) if datetime::is_encodable(until) => {
            parts.push(format!("{KW_RRULE_UNTIL}={}", datetime::encode(until)));
        }
        RecurrenceEnd::Until(until) => {
            tracing::debug!(%until, "end date before year 0 cannot be written");
        }
        RecurrenceEnd::Count(_) | RecurrenceEnd::Never => {}
    }

    match freq {
        Frequency::Weekly if !config.by_day.is_empty() => {
            parts.push(format!("{KW_RRULE_BYDAY}={}", join(config.by_day.iter())));
        }
        Frequency::Monthly => {
            if let Some(day) = config.by_month_day.filter(|d| (1..=31).contains(d)) {
                parts.push(format!("{KW_RRULE_BYMONTHDAY}={day}"));
            }
        }
        Frequency::Yearly => {
            let months: Vec<_> = config
                .by_month
                .iter()
                .filter(|m| (1..=12).contains(*m))
                .collect();
            if !months.is_empty() {
                parts.push(format!("{KW_RRULE_BYMONTH}={}", join(months.iter())));
            }
        }
        Frequency::Daily | Frequency::Weekly => {}
    }

    parts.join(";")
}

fn join<T: Display>(values: impl Iterator<Item = T>) -> String {
    values.map(|v| v.to_string()).collect::<Vec<_>>().join(",")
}
