// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The editor's working representation of a recurrence rule.
//!
//! A [`RecurrenceConfig`] is a plain value. Every user edit produces a new
//! configuration through one of the `with_*` methods, which consume the old
//! value, so a reader never observes a half-applied edit.

use std::collections::BTreeSet;
use std::fmt::{self, Display};

use jiff::Timestamp;

/// Frequencies the structured editor can produce.
///
/// RFC 5545 also defines `SECONDLY`, `MINUTELY` and `HOURLY`; rules using
/// those are valid but not editable.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
#[expect(missing_docs)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Day of the week, ordered Monday first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[expect(missing_docs)]
pub enum Weekday {
    #[strum(serialize = "MO")]
    #[serde(rename = "MO")]
    Monday,
    #[strum(serialize = "TU")]
    #[serde(rename = "TU")]
    Tuesday,
    #[strum(serialize = "WE")]
    #[serde(rename = "WE")]
    Wednesday,
    #[strum(serialize = "TH")]
    #[serde(rename = "TH")]
    Thursday,
    #[strum(serialize = "FR")]
    #[serde(rename = "FR")]
    Friday,
    #[strum(serialize = "SA")]
    #[serde(rename = "SA")]
    Saturday,
    #[strum(serialize = "SU")]
    #[serde(rename = "SU")]
    Sunday,
}

/// How a recurrence ends.
///
/// `COUNT` and `UNTIL` are mutually exclusive, so they share one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "UPPERCASE")]
pub enum RecurrenceEnd {
    /// Repeats forever
    #[default]
    Never,
    /// Ends after this many occurrences, at least 1
    Count(u32),
    /// Ends at this instant
    Until(Timestamp),
}

/// Discriminant of [`RecurrenceEnd`], for callers that want a flat view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
#[expect(missing_docs)]
pub enum EndType {
    Never,
    Count,
    Until,
}

/// Structured recurrence configuration edited by the event editor.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceConfig {
    /// Frequency of recurrence, `None` for an event that does not repeat
    pub frequency: Option<Frequency>,

    /// Interval between recurrences, at least 1
    pub interval: u32,

    /// End of the recurrence
    pub end: RecurrenceEnd,

    /// Days of the week, used only with [`Frequency::Weekly`]
    pub by_day: BTreeSet<Weekday>,

    /// Day of the month (1-31), used only with [`Frequency::Monthly`]
    pub by_month_day: Option<u8>,

    /// Months of the year (1-12), used only with [`Frequency::Yearly`]
    pub by_month: BTreeSet<u8>,
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        Self {
            frequency: None,
            interval: 1,
            end: RecurrenceEnd::Never,
            by_day: BTreeSet::new(),
            by_month_day: None,
            by_month: BTreeSet::new(),
        }
    }
}

impl RecurrenceConfig {
    /// A configuration that repeats with the given frequency and nothing else.
    #[must_use]
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency: Some(frequency),
            ..Self::default()
        }
    }

    /// Whether this configuration describes a repeating event.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.frequency.is_some()
    }

    /// Flat view of [`Self::end`].
    #[must_use]
    pub const fn end_type(&self) -> EndType {
        match self.end {
            RecurrenceEnd::Never => EndType::Never,
            RecurrenceEnd::Count(_) => EndType::Count,
            RecurrenceEnd::Until(_) => EndType::Until,
        }
    }

    /// The occurrence count, present only when the end type is `COUNT`.
    #[must_use]
    pub const fn count(&self) -> Option<u32> {
        match self.end {
            RecurrenceEnd::Count(n) => Some(n),
            _ => None,
        }
    }

    /// The end instant, present only when the end type is `UNTIL`.
    #[must_use]
    pub const fn until(&self) -> Option<Timestamp> {
        match self.end {
            RecurrenceEnd::Until(t) => Some(t),
            _ => None,
        }
    }

    /// Replace the frequency, `None` turns recurrence off.
    #[must_use]
    pub fn with_frequency(self, frequency: Option<Frequency>) -> Self {
        Self { frequency, ..self }
    }

    /// Replace the interval. Zero is clamped to 1.
    #[must_use]
    pub fn with_interval(self, interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            ..self
        }
    }

    /// End after `count` occurrences, clearing any `UNTIL`. Zero is clamped to 1.
    #[must_use]
    pub fn with_count(self, count: u32) -> Self {
        Self {
            end: RecurrenceEnd::Count(count.max(1)),
            ..self
        }
    }

    /// End at `until`, clearing any `COUNT`.
    #[must_use]
    pub fn with_until(self, until: Timestamp) -> Self {
        Self {
            end: RecurrenceEnd::Until(until),
            ..self
        }
    }

    /// Repeat forever, clearing both `COUNT` and `UNTIL`.
    #[must_use]
    pub fn never_ending(self) -> Self {
        Self {
            end: RecurrenceEnd::Never,
            ..self
        }
    }

    /// Replace the weekday selection.
    #[must_use]
    pub fn with_by_day(self, by_day: impl IntoIterator<Item = Weekday>) -> Self {
        Self {
            by_day: by_day.into_iter().collect(),
            ..self
        }
    }

    /// Replace the day of the month. Values outside 1-31 clear it.
    #[must_use]
    pub fn with_by_month_day(self, by_month_day: Option<u8>) -> Self {
        Self {
            by_month_day: by_month_day.filter(|d| (1..=31).contains(d)),
            ..self
        }
    }

    /// Replace the month selection. Values outside 1-12 are dropped.
    #[must_use]
    pub fn with_by_month(self, by_month: impl IntoIterator<Item = u8>) -> Self {
        Self {
            by_month: by_month
                .into_iter()
                .filter(|m| (1..=12).contains(m))
                .collect(),
            ..self
        }
    }
}

impl Display for RecurrenceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::rrule::generate(self))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn defaults_to_no_recurrence() {
        let config = RecurrenceConfig::default();
        assert!(!config.is_recurring());
        assert_eq!(config.interval, 1);
        assert_eq!(config.end_type(), EndType::Never);
        assert_eq!(config.count(), None);
        assert_eq!(config.until(), None);
    }

    #[test]
    fn count_and_until_replace_each_other() {
        let until = Timestamp::from_second(1_735_689_600).unwrap();

        let config = RecurrenceConfig::new(Frequency::Daily).with_count(5);
        assert_eq!(config.end_type(), EndType::Count);
        assert_eq!(config.count(), Some(5));

        let config = config.with_until(until);
        assert_eq!(config.end_type(), EndType::Until);
        assert_eq!(config.count(), None);
        assert_eq!(config.until(), Some(until));

        let config = config.with_count(3);
        assert_eq!(config.until(), None);
        assert_eq!(config.count(), Some(3));

        let config = config.never_ending();
        assert_eq!(config.end, RecurrenceEnd::Never);
    }

    #[test]
    fn clamps_out_of_range_edits() {
        let config = RecurrenceConfig::new(Frequency::Monthly)
            .with_interval(0)
            .with_count(0)
            .with_by_month_day(Some(32))
            .with_by_month([0, 3, 13, 12]);
        assert_eq!(config.interval, 1);
        assert_eq!(config.count(), Some(1));
        assert_eq!(config.by_month_day, None);
        assert_eq!(config.by_month, BTreeSet::from([3, 12]));
    }

    #[test]
    fn weekday_codes() {
        let codes: Vec<_> = Weekday::iter().map(|d| d.to_string()).collect();
        assert_eq!(codes, ["MO", "TU", "WE", "TH", "FR", "SA", "SU"]);
        assert_eq!("we".parse::<Weekday>().unwrap(), Weekday::Wednesday);
        assert!("1MO".parse::<Weekday>().is_err());
    }

    #[test]
    fn frequency_names() {
        let names: Vec<_> = Frequency::iter().map(|f| f.to_string()).collect();
        assert_eq!(names, ["DAILY", "WEEKLY", "MONTHLY", "YEARLY"]);
        assert_eq!("weekly".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert!("HOURLY".parse::<Frequency>().is_err());
    }
}
