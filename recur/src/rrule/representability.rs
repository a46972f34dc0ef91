// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Whether a raw rule survives a trip through the structured editor.

use crate::datetime;
use crate::keyword::{
    KW_RRULE_BYDAY, KW_RRULE_BYMONTH, KW_RRULE_BYMONTHDAY, KW_RRULE_COUNT, KW_RRULE_FREQ,
    KW_RRULE_INTERVAL, KW_RRULE_UNTIL,
};
use crate::model::Frequency;
use crate::rrule::parser::{self, parse};
use crate::rrule::part::{RulePart, parts};

/// Classification of a raw rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Representability {
    /// Editing the rule in the structured editor loses nothing
    FullyRepresentable,
    /// The rule uses constructs the editor cannot hold
    HasUnsupportedExtensions,
}

/// Why a rule cannot be edited without loss.
///
/// This is a warning for the user, never a reason to refuse saving the raw
/// text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnsupportedExtension {
    /// The text holds no rule at all
    #[error("no recurrence rule")]
    NoRule,

    /// Parts the editor has no field for, e.g. `BYSETPOS` or `WKST`
    #[error("uses rule parts the editor cannot represent: {}", .0.join(", "))]
    Parts(Vec<String>),

    /// `FREQ` is missing
    #[error("has no frequency")]
    MissingFrequency,

    /// `FREQ` is valid RFC 5545 but not one the editor offers, e.g. `HOURLY`
    #[error("uses frequency {0:?} which the editor cannot represent")]
    Frequency(String),

    /// A `BY*` part that does nothing for the rule's frequency, so
    /// regenerating the rule would drop it
    #[error("uses {part} which the editor only supports with {expected} rules")]
    MismatchedPart {
        /// Name of the rule part
        part: String,
        /// The frequency this part is editable with
        expected: Frequency,
    },

    /// A part that repeats, or `COUNT` together with `UNTIL`; the editor
    /// keeps only the later one
    #[error("sets {0} more than once")]
    Conflicting(String),

    /// A modeled part whose value the editor cannot hold, e.g. `BYDAY=1MO`
    #[error("uses {part}={value} which the editor cannot represent")]
    Value {
        /// Name of the rule part
        part: String,
        /// The raw value
        value: String,
    },
}

/// Classify raw rule text.
///
/// A rule is fully representable when every part is one the editor models,
/// the parser yields a configuration with a frequency, and nothing would be
/// dropped when the configuration is regenerated.
///
/// ## Examples
///
/// ```
/// # use aimcal_recur::rrule::{Representability, classify};
/// assert_eq!(classify("FREQ=WEEKLY;BYDAY=MO,WE"), Representability::FullyRepresentable);
/// assert_eq!(classify("FREQ=WEEKLY;BYSETPOS=-1"), Representability::HasUnsupportedExtensions);
/// ```
#[must_use]
pub fn classify(text: &str) -> Representability {
    match check_representable(text) {
        Ok(()) => Representability::FullyRepresentable,
        Err(_) => Representability::HasUnsupportedExtensions,
    }
}

/// Like [`classify`], but explain what the editor cannot hold.
///
/// ## Errors
///
/// Returns the first [`UnsupportedExtension`] found. Unmodeled parts are
/// reported together, in source order.
pub fn check_representable(text: &str) -> Result<(), UnsupportedExtension> {
    let mut unsupported: Vec<String> = Vec::new();
    for part in parts(text).filter(|p| !p.is_modeled()) {
        let key = part.normalized_key();
        if !unsupported.contains(&key) {
            unsupported.push(key);
        }
    }
    if !unsupported.is_empty() {
        return Err(UnsupportedExtension::Parts(unsupported));
    }

    if parts(text).next().is_none() {
        return Err(UnsupportedExtension::NoRule);
    }
    let config = parse(text).ok_or(UnsupportedExtension::NoRule)?;
    let Some(frequency) = config.frequency else {
        return Err(match parts(text).filter(|p| p.is(KW_RRULE_FREQ)).last() {
            Some(freq) => UnsupportedExtension::Frequency(freq.value.to_owned()),
            None => UnsupportedExtension::MissingFrequency,
        });
    };

    let mut seen: Vec<&str> = Vec::new();
    for part in parts(text) {
        let slot = if part.is(KW_RRULE_COUNT) || part.is(KW_RRULE_UNTIL) {
            "COUNT/UNTIL"
        } else {
            part.key
        };
        if seen.iter().any(|s| s.eq_ignore_ascii_case(slot)) {
            return Err(UnsupportedExtension::Conflicting(slot.to_ascii_uppercase()));
        }
        seen.push(slot);
        check_part(&part, frequency)?;
    }
    Ok(())
}

fn check_part(part: &RulePart<'_>, frequency: Frequency) -> Result<(), UnsupportedExtension> {
    let key = part.normalized_key();
    let (expected, holds) = match key.as_str() {
        KW_RRULE_FREQ => return Ok(()),
        KW_RRULE_INTERVAL | KW_RRULE_COUNT => (None, parser::positive(part.value).is_some()),
        // only RFC 5545 forms, the validator rejects the rest
        KW_RRULE_UNTIL => (
            None,
            datetime::is_date_or_date_time(part.value) && parser::until(part.value).is_some(),
        ),
        KW_RRULE_BYDAY => (
            Some(Frequency::Weekly),
            part.value
                .split(',')
                .all(|entry| parser::weekday(entry).is_some()),
        ),
        KW_RRULE_BYMONTHDAY => (
            Some(Frequency::Monthly),
            parser::month_day(part.value).is_some(),
        ),
        KW_RRULE_BYMONTH => (
            Some(Frequency::Yearly),
            part.value
                .split(',')
                .all(|entry| parser::month(entry).is_some()),
        ),
        _ => return Err(UnsupportedExtension::Parts(vec![key])),
    };

    if let Some(expected) = expected.filter(|f| *f != frequency) {
        return Err(UnsupportedExtension::MismatchedPart {
            part: key,
            expected,
        });
    }

    if holds {
        Ok(())
    } else {
        Err(UnsupportedExtension::Value {
            part: key,
            value: part.value.to_owned(),
        })
    }
}
