// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Limits for text arriving from outside the editor.

use std::str::FromStr;

const DEFAULT_MAX_RULE_LEN: usize = 1024;
const DEFAULT_MAX_TRIGGER_LEN: usize = 64;

/// Limits applied by the [`field`](crate::field) checks.
///
/// Usually read from the `[recur]` table of the application config:
///
/// ```toml
/// max_rule_len = 512
/// max_trigger_len = 32
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Longest accepted recurrence rule, in bytes.
    #[serde(default = "default_max_rule_len")]
    pub max_rule_len: usize,

    /// Longest accepted alarm trigger, in bytes.
    #[serde(default = "default_max_trigger_len")]
    pub max_trigger_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_rule_len: DEFAULT_MAX_RULE_LEN,
            max_trigger_len: DEFAULT_MAX_TRIGGER_LEN,
        }
    }
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

const fn default_max_rule_len() -> usize {
    DEFAULT_MAX_RULE_LEN
}

const fn default_max_trigger_len() -> usize {
    DEFAULT_MAX_TRIGGER_LEN
}
