// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Splitting rule text into `KEY=VALUE` parts.

use crate::keyword::MODELED_RRULE_PARTS;

/// One `KEY=VALUE` segment of a rule, both sides trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RulePart<'src> {
    pub key: &'src str,
    pub value: &'src str,
}

impl RulePart<'_> {
    /// Rule part names are case-insensitive.
    pub fn is(&self, keyword: &str) -> bool {
        self.key.eq_ignore_ascii_case(keyword)
    }

    /// Whether the structured editor has a field for this part.
    pub fn is_modeled(&self) -> bool {
        MODELED_RRULE_PARTS.iter().any(|kw| self.is(kw))
    }

    pub fn normalized_key(&self) -> String {
        self.key.to_ascii_uppercase()
    }
}

/// Split on `;`, skipping empty segments. A segment without `=` becomes a
/// part with an empty value.
pub(crate) fn parts(text: &str) -> impl Iterator<Item = RulePart<'_>> {
    text.split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) => RulePart {
                key: key.trim(),
                value: value.trim(),
            },
            None => RulePart {
                key: segment,
                value: "",
            },
        })
}
