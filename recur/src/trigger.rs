// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Alarm trigger text, as used by the `TRIGGER` property of a `VALARM`
//! (RFC 5545 Section 3.8.6.3).
//!
//! The editor shows a trigger as one value and one unit, so decoding keeps
//! only the coarsest non-zero unit of a duration: `-P1DT2H30M` is one day
//! before.

use chumsky::extra::ParserExtra;
use chumsky::input::Input;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;

use crate::value::{ValueExpected, value_u32};

/// When the alarm fires relative to the event.
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
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
#[expect(missing_docs)]
pub enum TriggerWhen {
    Before,
    /// Absolute date-time trigger; value and unit carry no meaning
    At,
    After,
}

/// Unit of a relative trigger.
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
pub enum TriggerUnit {
    Minutes,
    Hours,
    Days,
}

/// A trigger as the editor holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AlarmTrigger {
    /// Direction, or `At` for an absolute trigger
    pub when: TriggerWhen,
    /// Number of units, `0` for `At`
    pub value: u32,
    /// Unit of `value`
    pub unit: TriggerUnit,
}

impl AlarmTrigger {
    /// Trigger at an absolute date-time.
    pub const AT: Self = Self {
        when: TriggerWhen::At,
        value: 0,
        unit: TriggerUnit::Minutes,
    };

    /// Create a relative trigger.
    #[must_use]
    pub const fn new(when: TriggerWhen, value: u32, unit: TriggerUnit) -> Self {
        Self { when, value, unit }
    }

    /// Encode this trigger, see [`encode`].
    #[must_use]
    pub fn encode(&self) -> String {
        encode(self.when, self.value, self.unit)
    }
}

/// Encode a trigger as a duration using exactly one unit.
///
/// `At` encodes to an empty string: the absolute date-time belongs to the
/// event and is written by the caller.
///
/// ## Examples
///
/// ```
/// # use aimcal_recur::trigger::{self, TriggerUnit, TriggerWhen};
/// assert_eq!(trigger::encode(TriggerWhen::Before, 15, TriggerUnit::Minutes), "-PT15M");
/// assert_eq!(trigger::encode(TriggerWhen::After, 2, TriggerUnit::Days), "P2D");
/// assert_eq!(trigger::encode(TriggerWhen::At, 0, TriggerUnit::Minutes), "");
/// ```
#[must_use]
pub fn encode(when: TriggerWhen, value: u32, unit: TriggerUnit) -> String {
    let sign = match when {
        TriggerWhen::At => return String::new(),
        TriggerWhen::Before => "-",
        TriggerWhen::After => "",
    };
    match unit {
        TriggerUnit::Days => format!("{sign}P{value}D"),
        TriggerUnit::Hours => format!("{sign}PT{value}H"),
        TriggerUnit::Minutes => format!("{sign}PT{value}M"),
    }
}

/// Decode trigger text.
///
/// Accepts an absolute `YYYYMMDDTHHmmss[Z]` date-time, which becomes
/// [`AlarmTrigger::AT`], or a signed duration. Weeks count as seven days and
/// seconds are read but never reported. Returns `None` for empty or
/// unrecognized text and for durations without a non-zero day, hour or
/// minute.
///
/// ## Examples
///
/// ```
/// # use aimcal_recur::trigger::{self, AlarmTrigger, TriggerUnit, TriggerWhen};
/// assert_eq!(
///     trigger::decode("-P1DT2H30M"),
///     Some(AlarmTrigger::new(TriggerWhen::Before, 1, TriggerUnit::Days))
/// );
/// assert_eq!(trigger::decode("PT0M"), None);
/// ```
#[must_use]
pub fn decode(text: &str) -> Option<AlarmTrigger> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    match value_trigger::<'_, _, extra::Err<Rich<'_, char>>>()
        .parse(text)
        .into_result()
    {
        Ok(Trigger::Absolute) => Some(AlarmTrigger::AT),
        Ok(Trigger::Relative(duration)) => duration.coarsest(),
        Err(errs) => {
            tracing::debug!(text, errors = errs.len(), "unrecognized alarm trigger");
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Absolute,
    Relative(Duration),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Duration {
    positive: bool,
    day: u64,
    hour: u32,
    minute: u32,
}

impl Duration {
    fn coarsest(self) -> Option<AlarmTrigger> {
        let when = if self.positive {
            TriggerWhen::After
        } else {
            TriggerWhen::Before
        };
        let (value, unit) = if self.day > 0 {
            (u32::try_from(self.day).ok()?, TriggerUnit::Days)
        } else if self.hour > 0 {
            (self.hour, TriggerUnit::Hours)
        } else if self.minute > 0 {
            (self.minute, TriggerUnit::Minutes)
        } else {
            return None;
        };
        Some(AlarmTrigger::new(when, value, unit))
    }
}

/// Format Definition:
///
/// ```txt
/// trigger    = date-time / dur-value
/// date-time  = 8DIGIT "T" 6DIGIT ["Z"]
/// dur-value  = (["+"] / "-") "P" (dur-week / [dur-day] ["T" [dur-hour] [dur-minute] [dur-second]])
/// dur-week   = 1*DIGIT "W"
/// dur-day    = 1*DIGIT "D"
/// dur-hour   = 1*DIGIT "H"
/// dur-minute = 1*DIGIT "M"
/// dur-second = 1*DIGIT "S"
/// ```
///
/// The duration form is looser than RFC 5545, which requires at least one
/// component and does not allow skipping the minute between hour and
/// second.
fn value_trigger<'src, I, E>() -> impl Parser<'src, I, Trigger, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    let digit = select! { c @ '0'..='9' => c };
    let absolute = digit
        .repeated()
        .exactly(8)
        .then(just('T'))
        .then(digit.repeated().exactly(6))
        .then(just('Z').or_not())
        .to(Trigger::Absolute);

    let int = value_u32();
    let week = int.then_ignore(just('W')).map(|week| Duration {
        day: 7 * u64::from(week),
        ..Duration::default()
    });

    // case-sensitive
    let time = just('T').ignore_then(
        int.then_ignore(just('H'))
            .or_not()
            .then(int.then_ignore(just('M')).or_not())
            .then_ignore(int.then_ignore(just('S')).or_not()),
    );
    let date_time = int
        .then_ignore(just('D'))
        .or_not()
        .then(time.or_not())
        .map(|(day, time)| {
            let (hour, minute) = time.unwrap_or_default();
            Duration {
                day: day.map(u64::from).unwrap_or_default(),
                hour: hour.unwrap_or_default(),
                minute: minute.unwrap_or_default(),
                ..Duration::default()
            }
        });

    let sign = select! { c @ ('+' | '-') => c }
        .or_not()
        .map(|sign| !matches!(sign, Some('-')));
    let relative = sign
        .then_ignore(just('P'))
        .then(choice((week, date_time)))
        .map(|(positive, duration)| {
            Trigger::Relative(Duration {
                positive,
                ..duration
            })
        });

    choice((absolute, relative))
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn decodes_durations() {
        use TriggerUnit::{Days, Hours, Minutes};
        use TriggerWhen::{After, Before};

        #[rustfmt::skip]
        let success_cases = [
            ("-PT15M",       AlarmTrigger::new(Before, 15, Minutes)),
            ("PT15M",        AlarmTrigger::new(After,  15, Minutes)),
            ("+PT15M",       AlarmTrigger::new(After,  15, Minutes)),
            ("-PT1H",        AlarmTrigger::new(Before,  1, Hours)),
            ("-P1D",         AlarmTrigger::new(Before,  1, Days)),
            ("P2D",          AlarmTrigger::new(After,   2, Days)),
            ("-P1DT2H30M",   AlarmTrigger::new(Before,  1, Days)),
            ("-PT2H30M",     AlarmTrigger::new(Before,  2, Hours)),
            ("-PT0H30M",     AlarmTrigger::new(Before, 30, Minutes)),
            ("-P0DT0H5M",    AlarmTrigger::new(Before,  5, Minutes)),
            ("-PT10M30S",    AlarmTrigger::new(Before, 10, Minutes)),
            ("-P1W",         AlarmTrigger::new(Before,  7, Days)),
            ("P2W",          AlarmTrigger::new(After,  14, Days)),
            ("P15DT5H0M20S", AlarmTrigger::new(After,  15, Days)),
            (" -PT5M ",      AlarmTrigger::new(Before,  5, Minutes)),
        ];
        for (src, expected) in success_cases {
            assert_eq!(decode(src), Some(expected), "Failed for {src}");
        }
    }

    #[test]
    fn decodes_absolute_date_time() {
        for src in ["20250115T100000Z", "20250115T100000"] {
            assert_eq!(decode(src), Some(AlarmTrigger::AT), "Failed for {src}");
        }
    }

    #[test]
    fn rejects_unrecognized_text() {
        let fail_cases = [
            "",           // empty
            "PT0M",       // all zero
            "-P0D",       // all zero
            "PT30S",      // seconds only
            "P",          // no components
            "PT",         // no time components
            "P3X",        // invalid designator
            "P-3W",       // sign after 'P'
            "3W",         // missing 'P'
            "pt15m",      // lowercase
            "-PT15",      // missing designator
            "P1W2D",      // weeks mixed with days
            "2025011T100000Z",
            "20250115T100000ZZ",
            "2025-01-15T10:00:00Z",
            "15 minutes before",
        ];
        for src in fail_cases {
            assert_eq!(decode(src), None, "Decode {src:?} should fail");
        }
    }

    #[test]
    fn encodes_one_unit() {
        use TriggerUnit::{Days, Hours, Minutes};
        use TriggerWhen::{After, At, Before};

        #[rustfmt::skip]
        let cases = [
            (Before, 15, Minutes, "-PT15M"),
            (Before,  2, Hours,   "-PT2H"),
            (Before,  1, Days,    "-P1D"),
            (After,  15, Minutes, "PT15M"),
            (After,   2, Hours,   "PT2H"),
            (After,   3, Days,    "P3D"),
            (At,      0, Minutes, ""),
            (At,      9, Days,    ""),
        ];
        for (when, value, unit, expected) in cases {
            assert_eq!(encode(when, value, unit), expected);
            assert_eq!(AlarmTrigger::new(when, value, unit).encode(), expected);
        }
    }

    #[test]
    fn round_trips_relative_triggers() {
        for when in [TriggerWhen::Before, TriggerWhen::After] {
            for unit in TriggerUnit::iter() {
                for value in [1, 15, 90, 1440] {
                    let trigger = AlarmTrigger::new(when, value, unit);
                    assert_eq!(decode(&trigger.encode()), Some(trigger));
                }
            }
        }
    }

    #[test]
    fn zero_value_does_not_round_trip() {
        let text = encode(TriggerWhen::Before, 0, TriggerUnit::Minutes);
        assert_eq!(text, "-PT0M");
        assert_eq!(decode(&text), None);
    }

    #[test]
    fn names_are_uppercase() {
        assert_eq!(TriggerWhen::Before.to_string(), "BEFORE");
        assert_eq!("minutes".parse::<TriggerUnit>(), Ok(TriggerUnit::Minutes));
    }
}
