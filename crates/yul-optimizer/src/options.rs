// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options for [`crate::SplitProcessor`], readable from TOML:
///
/// ```toml
/// skip-trivial-forwarders = true
/// verify-dropped-unreferenced = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SplitOptions {
    /// Leave functions alone whose body is empty or a single call to a user function
    pub skip_trivial_forwarders: bool,

    /// Abort when a dropped slot is still referenced in the split-off body
    pub verify_dropped_unreferenced: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            skip_trivial_forwarders: true,
            verify_dropped_unreferenced: true,
        }
    }
}

impl SplitOptions {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("invalid split options")
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading split options from `{}`", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("loading split options from `{}`", path.display()))
    }
}
