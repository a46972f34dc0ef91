// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Checks for rule and trigger text arriving from outside the editor, such
//! as an import or an API request.
//!
//! These add the length limits from [`Config`] on top of the codec. A rule
//! the editor cannot represent is still accepted: the classification is
//! returned so the caller can warn, and saving the raw text is never blocked.

use crate::config::Config;
use crate::rrule::{self, Representability, StructuralViolation};
use crate::trigger::{self, AlarmTrigger};

/// Which field a [`FieldError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    /// Recurrence rule text
    Rule,
    /// Alarm trigger text
    Trigger,
}

/// Text that must not be saved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The text exceeds the configured limit
    #[error("{field} is {len} bytes long, the limit is {max}")]
    TooLong {
        /// The offending field
        field: Field,
        /// Length of the text in bytes
        len: usize,
        /// Configured limit in bytes
        max: usize,
    },

    /// The rule is not structurally valid
    #[error(transparent)]
    Structural(#[from] StructuralViolation),

    /// The trigger is neither a duration nor an absolute date-time
    #[error("unrecognized alarm trigger {0:?}")]
    UnrecognizedTrigger(String),
}

/// Check rule text before saving.
///
/// ## Errors
///
/// Returns [`FieldError::TooLong`] when the text exceeds
/// [`Config::max_rule_len`], or [`FieldError::Structural`] when it fails
/// [`rrule::validate`].
pub fn check_rule_field(config: &Config, text: &str) -> Result<Representability, FieldError> {
    check_len(Field::Rule, text, config.max_rule_len)?;
    rrule::validate(text)?;

    let representability = rrule::classify(text);
    if representability == Representability::HasUnsupportedExtensions && !text.trim().is_empty() {
        tracing::debug!(text, "rule cannot be edited without loss");
    }
    Ok(representability)
}

/// Check trigger text before saving. Empty text means "no alarm".
///
/// ## Errors
///
/// Returns [`FieldError::TooLong`] when the text exceeds
/// [`Config::max_trigger_len`], or [`FieldError::UnrecognizedTrigger`] when
/// non-empty text does not decode.
pub fn check_trigger_field(
    config: &Config,
    text: &str,
) -> Result<Option<AlarmTrigger>, FieldError> {
    check_len(Field::Trigger, text, config.max_trigger_len)?;
    if text.trim().is_empty() {
        return Ok(None);
    }

    match trigger::decode(text) {
        Some(trigger) => Ok(Some(trigger)),
        None => Err(FieldError::UnrecognizedTrigger(text.to_owned())),
    }
}

fn check_len(field: Field, text: &str, max: usize) -> Result<(), FieldError> {
    if text.len() > max {
        tracing::debug!(%field, len = text.len(), max, "text exceeds limit");
        return Err(FieldError::TooLong {
            field,
            len: text.len(),
            max,
        });
    }
    Ok(())
}
