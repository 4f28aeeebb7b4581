// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registry of configuration units.
//!
//! ```text
//! by name:             "android_armv7_clang" --> unit
//! by (arch, toolchain): ("armv7", "clang")   --> unit
//!
//! input ["android_*", "android_armv7_clang"]
//!   match_pattern: "android_*" --> [android_armv7_clang, ...]
//!   dedupe + preserve order
//! ```

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Context;
use tracing::warn;
use wax::{Glob, Program};

use super::ToolchainUnit;
use super::units::AndroidArmv7Clang;
use crate::error::{ConfigurationError, NdkResult, Result};

/// Lookup table for configuration units.
#[derive(Default)]
pub struct UnitRegistry {
    units: BTreeMap<&'static str, Box<dyn ToolchainUnit>>,

    /// (arch, toolchain) -> unit name.
    combos: BTreeMap<(&'static str, &'static str), &'static str>,
}

impl UnitRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in unit.
    #[must_use]
    pub fn with_builtin_units() -> Self {
        let mut registry = Self::new();
        for unit in builtin_units() {
            // Built-in names and combos are distinct.
            if let Err(e) = registry.register(unit) {
                warn!(error = %e, "skipping built-in unit");
            }
        }
        registry
    }

    /// Registers a unit.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::DuplicateUnit` if the name or the
    /// (arch, toolchain) pair is already taken.
    pub fn register(&mut self, unit: Box<dyn ToolchainUnit>) -> NdkResult<()> {
        let name = unit.name();
        let combo = (unit.arch(), unit.toolchain());

        if self.units.contains_key(name) || self.combos.contains_key(&combo) {
            return Err(ConfigurationError::DuplicateUnit(name.to_string()).into());
        }

        self.combos.insert(combo, name);
        self.units.insert(name, unit);
        Ok(())
    }

    /// Looks up a unit by name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::UnknownUnit` if nothing is registered
    /// under `name`.
    pub fn get(&self, name: &str) -> NdkResult<&dyn ToolchainUnit> {
        self.units
            .get(name)
            .map(|unit| unit.as_ref())
            .ok_or_else(|| ConfigurationError::UnknownUnit(name.to_string()).into())
    }

    /// Looks up a unit by architecture family and toolchain.
    #[must_use]
    pub fn find(&self, arch: &str, toolchain: &str) -> Option<&dyn ToolchainUnit> {
        self.combos
            .iter()
            .find(|((a, t), _)| *a == arch && *t == toolchain)
            .and_then(|(_, name)| self.units.get(name))
            .map(|unit| unit.as_ref())
    }

    /// Returns all registered unit names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.units.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Matches a glob pattern against registered unit names.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid glob.
    pub fn match_pattern(&self, pattern: &str) -> Result<Vec<&'static str>> {
        if let Some((name, _)) = self.units.get_key_value(pattern) {
            return Ok(vec![*name]);
        }

        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        Ok(self.names().filter(|name| glob.is_match(*name)).collect())
    }

    /// Resolves names and glob patterns to unit names.
    ///
    /// Results are deduplicated and keep the order of first appearance.
    /// Patterns that match nothing are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is not a valid glob.
    pub fn resolve<S: AsRef<str>>(&self, specs: &[S]) -> Result<Vec<&'static str>> {
        let mut result = Vec::new();
        let mut seen = BTreeSet::new();

        for spec in specs {
            let pattern = spec.as_ref();
            let matches = self.match_pattern(pattern)?;

            if matches.is_empty() {
                warn!(pattern, "pattern matched no units");
            }

            for name in matches {
                if seen.insert(name) {
                    result.push(name);
                }
            }
        }

        Ok(result)
    }
}

fn builtin_units() -> Vec<Box<dyn ToolchainUnit>> {
    vec![Box::new(AndroidArmv7Clang::new())]
}
