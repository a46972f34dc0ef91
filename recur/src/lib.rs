// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Translate between the event editor's structured recurrence and alarm
//! settings and their iCalendar (RFC 5545) text.
//!
//! - [`rrule`] parses, generates, validates and classifies `RRULE` values.
//! - [`trigger`] decodes and encodes `VALARM` `TRIGGER` values.
//! - [`datetime`] handles the `YYYYMMDDTHHmmssZ` text used by `UNTIL`.
//! - [`field`] checks text from outside the editor before it is saved.
//!
//! Everything here is a pure function of its input.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::single_match_else, clippy::module_name_repetitions)]

pub mod config;
pub mod datetime;
pub mod field;
pub mod keyword;
mod model;
pub mod rrule;
pub mod trigger;
mod value;

pub use crate::config::Config;
pub use crate::datetime::MalformedInput;
pub use crate::field::{Field, FieldError, check_rule_field, check_trigger_field};
pub use crate::model::{EndType, Frequency, RecurrenceConfig, RecurrenceEnd, Weekday};
pub use crate::rrule::{Representability, StructuralViolation, UnsupportedExtension};
pub use crate::trigger::{AlarmTrigger, TriggerUnit, TriggerWhen};
