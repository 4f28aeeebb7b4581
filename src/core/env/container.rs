// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build environment struct and copy-on-write implementation.
//!
//! # Architecture
//!
//! ```text
//! BuildEnvironment (copy-on-write)
//! data: Arc<EnvData>
//! clone shares Arc until the first write (Arc::make_mut)
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Serialize, Serializer};

use super::types::{EnvData, SettingValue, keys};
use crate::error::{ConfigurationError, NdkResult};

/// Settings shared and mutated by every configuration unit of one build.
///
/// Sequence settings are append-only from a unit's point of view: units add
/// to the end of `INCLUDES`, `CFLAGS`, ... and never replace what earlier
/// units wrote, so ordering guarantees survive across units.
///
/// Cloning is cheap; the data is shared until one side is modified.
#[derive(Debug, Clone, Default)]
pub struct BuildEnvironment {
    data: Arc<EnvData>,
}

impl BuildEnvironment {
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Arc::new(EnvData::new()),
        }
    }

    /// Creates an environment where every compiler sequence setting exists
    /// and is empty, so appending always works.
    #[must_use]
    pub fn with_compiler_defaults() -> Self {
        let mut env = Self::new();
        for key in keys::COMPILER_LISTS {
            env.set(*key, SettingValue::List(Vec::new()));
        }
        env
    }

    /// Sets a setting, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: SettingValue) -> &mut Self {
        self.vars_mut().insert(key.into(), value);
        self
    }

    /// Sets a string setting.
    pub fn set_str(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.set(key, SettingValue::Str(value.into()))
    }

    /// Sets a path setting (stored as a string).
    pub fn set_path(&mut self, key: impl Into<String>, value: impl AsRef<Path>) -> &mut Self {
        self.set_str(key, value.as_ref().display().to_string())
    }

    /// Sets a boolean setting.
    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) -> &mut Self {
        self.set(key, SettingValue::Bool(value))
    }

    /// Appends items to a sequence setting, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::SettingType` if the setting exists but is
    /// not a list.
    pub fn append<I, S>(&mut self, key: &str, items: I) -> NdkResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self
            .vars_mut()
            .entry(key.to_string())
            .or_insert_with(|| SettingValue::List(Vec::new()));

        match entry {
            SettingValue::List(list) => {
                list.extend(items.into_iter().map(Into::into));
            }
            _ => {
                return Err(ConfigurationError::SettingType {
                    key: key.to_string(),
                    expected: "list",
                }
                .into());
            }
        }

        Ok(self)
    }

    /// Gets a setting value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.data.vars().get(key)
    }

    /// Returns true if the setting exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.data.vars().contains_key(key)
    }

    /// Gets a required string setting.
    ///
    /// # Errors
    ///
    /// Returns `MissingSetting` if absent or `SettingType` if not a string.
    pub fn get_str(&self, key: &str) -> NdkResult<&str> {
        match self.require(key)? {
            SettingValue::Str(s) => Ok(s),
            _ => Err(type_error(key, "string")),
        }
    }

    /// Gets a required path setting.
    ///
    /// # Errors
    ///
    /// Returns `MissingSetting` if absent or `SettingType` if not a string.
    pub fn get_path(&self, key: &str) -> NdkResult<PathBuf> {
        self.get_str(key).map(PathBuf::from)
    }

    /// Gets a required boolean setting.
    ///
    /// # Errors
    ///
    /// Returns `MissingSetting` if absent or `SettingType` if not a bool.
    pub fn get_bool(&self, key: &str) -> NdkResult<bool> {
        match self.require(key)? {
            SettingValue::Bool(b) => Ok(*b),
            _ => Err(type_error(key, "bool")),
        }
    }

    /// Gets a sequence setting; an absent setting reads as empty.
    ///
    /// # Errors
    ///
    /// Returns `SettingType` if the setting exists but is not a list.
    pub fn get_list(&self, key: &str) -> NdkResult<&[String]> {
        match self.get(key) {
            None => Ok(&[]),
            Some(SettingValue::List(list)) => Ok(list),
            Some(_) => Err(type_error(key, "list")),
        }
    }

    /// Removes a setting.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.vars_mut().remove(key);
        self
    }

    /// Returns all settings as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, SettingValue> {
        self.data.vars().clone()
    }

    /// Returns an iterator over settings in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.data.vars().iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns true if no settings are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.vars().is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.vars().len()
    }

    /// Returns true if both environments share the same underlying data.
    #[must_use]
    pub fn shares_data_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    fn require(&self, key: &str) -> NdkResult<&SettingValue> {
        self.get(key).ok_or_else(|| {
            ConfigurationError::MissingSetting {
                key: key.to_string(),
            }
            .into()
        })
    }

    fn vars_mut(&mut self) -> &mut BTreeMap<String, SettingValue> {
        Arc::make_mut(&mut self.data).vars_mut()
    }
}

fn type_error(key: &str, expected: &'static str) -> crate::error::NdkError {
    ConfigurationError::SettingType {
        key: key.to_string(),
        expected,
    }
    .into()
}

impl PartialEq for BuildEnvironment {
    fn eq(&self, other: &Self) -> bool {
        self.data.vars() == other.data.vars()
    }
}

impl Eq for BuildEnvironment {}

impl Serialize for BuildEnvironment {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.data.vars().serialize(serializer)
    }
}
