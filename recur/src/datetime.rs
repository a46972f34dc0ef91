// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Conversion between UTC timestamps and the fixed-width `YYYYMMDDTHHmmssZ`
//! text used by `UNTIL`.
//!
//! All field values are taken in UTC. The system time zone is never
//! consulted, so a timestamp encodes to the same text on every machine
//! regardless of daylight saving time.

use chumsky::extra::ParserExtra;
use chumsky::input::Input;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;
use jiff::Timestamp;
use jiff::civil;
use jiff::tz::TimeZone;

use crate::value::{ValueExpected, i8_0_9, i16_0_9};

/// The text is not a `YYYYMMDDTHHmmssZ` date-time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed date-time {input:?}: {reason}")]
pub struct MalformedInput {
    /// The rejected text
    pub input: String,
    /// Human-readable explanation
    pub reason: String,
}

impl MalformedInput {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Encode a timestamp as `YYYYMMDDTHHmmssZ`.
///
/// Sub-second precision is truncated. The four-digit year only covers
/// 0000-9999; check [`is_encodable`] first, text for earlier instants does
/// not decode.
#[must_use]
pub fn encode(timestamp: Timestamp) -> String {
    let dt = timestamp.to_zoned(TimeZone::UTC).datetime();
    format!(
        "{:04}{:02}{:02}T{:02}{:02}{:02}Z",
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second()
    )
}

/// Whether [`encode`] yields text that [`decode`] reads back.
#[must_use]
pub fn is_encodable(timestamp: Timestamp) -> bool {
    timestamp.to_zoned(TimeZone::UTC).year() >= 0
}

/// Decode a strict `YYYYMMDDTHHmmssZ` date-time into a UTC timestamp.
///
/// ## Errors
///
/// Returns [`MalformedInput`] if the text has the wrong length, contains
/// characters outside the expected classes, or names a date or time that
/// does not exist (month 13, February 30, leap second 60).
pub fn decode(text: &str) -> Result<Timestamp, MalformedInput> {
    let value = parse_ics_date_time(text)?;
    if value.form != IcsForm::Utc {
        return Err(MalformedInput::new(
            text,
            "expected a UTC date-time of the form YYYYMMDDTHHmmssZ",
        ));
    }
    value.to_timestamp(text)
}

/// Decode an end date the way a lenient reader would.
///
/// Tries [`decode`] first, then falls back to an RFC 3339 timestamp, a
/// floating `YYYYMMDDTHHmmss` date-time or a `YYYYMMDD` date, and finally an
/// ISO 8601 civil date or date-time. Values without an offset are read as
/// UTC.
#[must_use]
pub fn decode_lenient(text: &str) -> Option<Timestamp> {
    let text = text.trim();
    if let Ok(ts) = decode(text) {
        return Some(ts);
    }

    if let Some(ts) = parse_ics_date_time(text)
        .and_then(|value| value.to_timestamp(text))
        .ok()
    {
        return Some(ts);
    }

    if let Ok(ts) = text.parse::<Timestamp>() {
        return Some(ts);
    }

    let civil = text
        .parse::<civil::DateTime>()
        .ok()
        .or_else(|| text.parse::<civil::Date>().ok().map(|d| d.at(0, 0, 0, 0)));
    let ts = civil.and_then(|dt| dt.to_zoned(TimeZone::UTC).ok())?;
    tracing::debug!(text, "decoded end date with generic date parsing");
    Some(ts.timestamp())
}

/// Whether the text is an RFC 5545 DATE or DATE-TIME value, UTC or floating.
pub(crate) fn is_date_or_date_time(text: &str) -> bool {
    parse_ics_date_time(text).is_ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IcsForm {
    /// `YYYYMMDD`
    Date,
    /// `YYYYMMDDTHHmmss`
    Floating,
    /// `YYYYMMDDTHHmmssZ`
    Utc,
}

#[derive(Debug, Clone, Copy)]
struct IcsDateTime {
    datetime: civil::DateTime,
    form: IcsForm,
}

impl IcsDateTime {
    fn to_timestamp(self, text: &str) -> Result<Timestamp, MalformedInput> {
        self.datetime
            .to_zoned(TimeZone::UTC)
            .map(|zoned| zoned.timestamp())
            .map_err(|e| MalformedInput::new(text, e.to_string()))
    }
}

fn parse_ics_date_time(text: &str) -> Result<IcsDateTime, MalformedInput> {
    value_ics_date_time::<'_, _, extra::Err<Rich<'_, char>>>()
        .parse(text)
        .into_result()
        .map_err(|errs| {
            let reason = errs
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            MalformedInput::new(text, reason)
        })
}

/// Format Definition:
///
/// ```txt
/// enddate      = date / date-time
/// date-value   = date-fullyear date-month date-mday
/// date-time    = date "T" time
/// time         = time-hour time-minute time-second [time-utc]
/// time-utc     = "Z"
/// ```
///
/// Every field is fixed width. Range checks are delegated to
/// [`civil::DateTime::new`], which also rejects leap seconds.
fn value_ics_date_time<'src, I, E>() -> impl Parser<'src, I, IcsDateTime, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    let year = i16_0_9()
        .then(i16_0_9())
        .then(i16_0_9())
        .then(i16_0_9())
        .map(|(((a, b), c), d)| 1000 * a + 100 * b + 10 * c + d);

    let time = just('T')
        .ignore_then(two_digits())
        .then(two_digits())
        .then(two_digits())
        .then(just('Z').or_not())
        .map(|(((hour, minute), second), utc)| (hour, minute, second, utc.is_some()));

    year.then(two_digits())
        .then(two_digits())
        .then(time.or_not())
        .try_map(|(((year, month), day), time), span| {
            let (hour, minute, second, form) = match time {
                None => (0, 0, 0, IcsForm::Date),
                Some((h, m, s, false)) => (h, m, s, IcsForm::Floating),
                Some((h, m, s, true)) => (h, m, s, IcsForm::Utc),
            };
            civil::DateTime::new(year, month, day, hour, minute, second, 0)
                .map(|datetime| IcsDateTime { datetime, form })
                .map_err(|_| E::Error::expected_found([ValueExpected::DateTime], None, span))
        })
}

fn two_digits<'src, I, E>() -> impl Parser<'src, I, i8, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    i8_0_9().then(i8_0_9()).map(|(a, b)| 10 * a + b)
}
