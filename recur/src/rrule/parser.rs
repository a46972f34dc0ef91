// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Best-effort conversion of rule text into a [`RecurrenceConfig`].

use std::collections::BTreeSet;

use jiff::Timestamp;

use crate::datetime;
use crate::keyword::{
    KW_RRULE_BYDAY, KW_RRULE_BYMONTH, KW_RRULE_BYMONTHDAY, KW_RRULE_COUNT, KW_RRULE_FREQ,
    KW_RRULE_INTERVAL, KW_RRULE_UNTIL,
};
use crate::model::{Frequency, RecurrenceConfig, RecurrenceEnd, Weekday};
use crate::rrule::part::parts;
use crate::value::parse_u32;

/// Parse rule text into the editor's configuration.
///
/// Returns `None` only for empty or whitespace-only text. Anything else
/// yields a configuration, possibly without a frequency, which callers must
/// treat as "no recurrence" rather than as a failure. Parts the editor does
/// not model and values it cannot hold are dropped; use
/// [`classify`](crate::rrule::classify) to find out whether that happened.
///
/// ## Examples
///
/// ```
/// # use aimcal_recur::{Frequency, Weekday, rrule};
/// let config = rrule::parse("FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,FR").unwrap();
/// assert_eq!(config.frequency, Some(Frequency::Weekly));
/// assert_eq!(config.interval, 2);
/// assert!(config.by_day.contains(&Weekday::Friday));
/// ```
#[must_use]
pub fn parse(text: &str) -> Option<RecurrenceConfig> {
    if text.trim().is_empty() {
        return None;
    }

    let mut config = RecurrenceConfig::default();
    for part in parts(text) {
        match part.normalized_key().as_str() {
            KW_RRULE_FREQ => {
                config.frequency = frequency(part.value);
                if config.frequency.is_none() {
                    tracing::debug!(value = part.value, "frequency is not editable");
                }
            }
            KW_RRULE_INTERVAL => match positive(part.value) {
                Some(interval) => config.interval = interval,
                None => tracing::debug!(value = part.value, "ignoring invalid interval"),
            },
            KW_RRULE_COUNT => match positive(part.value) {
                Some(count) => config.end = RecurrenceEnd::Count(count),
                None => tracing::debug!(value = part.value, "ignoring invalid count"),
            },
            KW_RRULE_UNTIL => match until(part.value) {
                Some(until) => config.end = RecurrenceEnd::Until(until),
                None => tracing::debug!(value = part.value, "ignoring undecodable end date"),
            },
            KW_RRULE_BYDAY => config.by_day = by_day(part.value),
            KW_RRULE_BYMONTHDAY => {
                config.by_month_day = month_day(part.value);
                if config.by_month_day.is_none() {
                    tracing::debug!(value = part.value, "ignoring invalid day of month");
                }
            }
            KW_RRULE_BYMONTH => config.by_month = by_month(part.value),
            _ => tracing::debug!(key = part.key, "skipping rule part"),
        }
    }
    Some(config)
}

pub(super) fn frequency(value: &str) -> Option<Frequency> {
    value.parse().ok()
}

pub(super) fn positive(value: &str) -> Option<u32> {
    parse_u32(value).filter(|&n| n >= 1)
}

pub(super) fn until(value: &str) -> Option<Timestamp> {
    datetime::decode_lenient(value)
}

pub(super) fn weekday(entry: &str) -> Option<Weekday> {
    entry.trim().parse().ok()
}

pub(super) fn month_day(value: &str) -> Option<u8> {
    parse_u32(value)
        .filter(|d| (1..=31).contains(d))
        .and_then(|d| u8::try_from(d).ok())
}

pub(super) fn month(entry: &str) -> Option<u8> {
    parse_u32(entry.trim())
        .filter(|m| (1..=12).contains(m))
        .and_then(|m| u8::try_from(m).ok())
}

fn by_day(value: &str) -> BTreeSet<Weekday> {
    value
        .split(',')
        .filter_map(|entry| {
            let day = weekday(entry);
            if day.is_none() {
                tracing::debug!(entry, "dropping weekday the editor cannot hold");
            }
            day
        })
        .collect()
}

fn by_month(value: &str) -> BTreeSet<u8> {
    value
        .split(',')
        .filter_map(|entry| {
            let m = month(entry);
            if m.is_none() {
                tracing::debug!(entry, "dropping invalid month");
            }
            m
        })
        .collect()
}
