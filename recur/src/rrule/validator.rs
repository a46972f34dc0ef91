// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Structural checks on raw rule text.
//!
//! The validator reads the text directly rather than going through
//! [`parse`](crate::rrule::parse): imported rules may use parts the editor
//! does not model, and those still have to be checked.

use std::collections::HashSet;

use crate::datetime;
use crate::keyword::{
    KW_RRULE_COUNT, KW_RRULE_FREQ, KW_RRULE_INTERVAL, KW_RRULE_UNTIL, RRULE_FREQUENCIES,
};
use crate::rrule::part::{RulePart, parts};
use crate::value::parse_u32;

/// A rule that breaks a cross-part constraint of RFC 5545 Section 3.3.10.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralViolation {
    /// No `FREQ` part
    #[error("FREQ is required")]
    MissingFreq,

    /// `FREQ` is not one of the seven RFC 5545 frequencies
    #[error(
        "FREQ must be one of SECONDLY, MINUTELY, HOURLY, DAILY, WEEKLY, MONTHLY or YEARLY, found {0:?}"
    )]
    InvalidFreq(String),

    /// Both `UNTIL` and `COUNT` are present
    #[error("UNTIL and COUNT must not both be present")]
    CountWithUntil,

    /// `COUNT` is not an integer from 1 to `u32::MAX`
    #[error("COUNT must be a positive 32-bit integer, found {0:?}")]
    InvalidCount(String),

    /// `INTERVAL` is not an integer from 1 to `u32::MAX`
    #[error("INTERVAL must be a positive 32-bit integer, found {0:?}")]
    InvalidInterval(String),

    /// A rule part occurs more than once
    #[error("{0} must not occur more than once")]
    DuplicatePart(String),

    /// `UNTIL` is neither a DATE nor a DATE-TIME
    #[error("UNTIL must be a DATE or DATE-TIME value, found {0:?}")]
    InvalidUntil(String),
}

/// Check rule text for structural correctness.
///
/// Empty text is valid and means "no recurrence". The checks run in a fixed
/// order and the first failure is reported.
///
/// ## Errors
///
/// Returns the [`StructuralViolation`] of the first failing check.
///
/// ## Examples
///
/// ```
/// # use aimcal_recur::rrule::{StructuralViolation, validate};
/// assert!(validate("").is_ok());
/// assert!(validate("FREQ=HOURLY;INTERVAL=6").is_ok());
/// assert_eq!(validate("COUNT=5"), Err(StructuralViolation::MissingFreq));
/// ```
pub fn validate(text: &str) -> Result<(), StructuralViolation> {
    check(text).inspect_err(|err| tracing::debug!(text, %err, "rejected recurrence rule"))
}

fn check(text: &str) -> Result<(), StructuralViolation> {
    if text.trim().is_empty() {
        return Ok(());
    }

    let parts: Vec<RulePart<'_>> = parts(text).collect();
    let find = |keyword: &str| parts.iter().find(|part| part.is(keyword));

    let freq = find(KW_RRULE_FREQ).ok_or(StructuralViolation::MissingFreq)?;
    if !RRULE_FREQUENCIES
        .iter()
        .any(|f| f.eq_ignore_ascii_case(freq.value))
    {
        return Err(StructuralViolation::InvalidFreq(freq.value.to_owned()));
    }

    let count = find(KW_RRULE_COUNT);
    let until = find(KW_RRULE_UNTIL);
    if count.is_some() && until.is_some() {
        return Err(StructuralViolation::CountWithUntil);
    }

    if let Some(count) = count.filter(|c| !is_positive(c.value)) {
        return Err(StructuralViolation::InvalidCount(count.value.to_owned()));
    }

    if let Some(interval) = find(KW_RRULE_INTERVAL).filter(|i| !is_positive(i.value)) {
        return Err(StructuralViolation::InvalidInterval(
            interval.value.to_owned(),
        ));
    }

    let mut seen = HashSet::new();
    for part in &parts {
        let key = part.normalized_key();
        if !seen.insert(key.clone()) {
            return Err(StructuralViolation::DuplicatePart(key));
        }
    }

    if let Some(until) = until.filter(|u| !datetime::is_date_or_date_time(u.value)) {
        return Err(StructuralViolation::InvalidUntil(until.value.to_owned()));
    }

    Ok(())
}

fn is_positive(value: &str) -> bool {
    parse_u32(value).is_some_and(|n| n >= 1)
}
