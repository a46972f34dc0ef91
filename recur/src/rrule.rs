// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule (RFC 5545 Section 3.3.10) text handling.
//!
//! The [`parse`] function is deliberately lenient: it reads whatever the
//! editor can model and silently drops the rest, so any stored rule can be
//! displayed. [`validate`] and [`classify`] work on the raw text and are
//! strict; they answer whether a rule is well formed and whether it survives
//! a trip through the editor. Keep the two paths separate.

mod generator;
mod parser;
mod part;
mod representability;
mod validator;

pub use generator::generate;
pub use parser::parse;
pub use representability::{
    Representability, UnsupportedExtension, check_representable, classify,
};
pub use validator::{StructuralViolation, validate};
