// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for ndk-conf.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, NdkConfig, HostConfig, PathsConfig
//! Layers: loader name → SettingsLayer (flags appended to the build env)
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::core::env::{BuildEnvironment, keys};
use crate::core::ndk::LayoutPolicy;
use crate::error::NdkResult;
use crate::logging::LogLevel;

/// Default platform API level directory used for legacy NDK layouts.
pub const DEFAULT_NDK_PLATFORM: &str = "android-21";

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::Info,
            file_log_level: LogLevel::Trace,
            log_file: None,
        }
    }
}

/// NDK installation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NdkConfig {
    /// NDK root. Falls back to `ANDROID_NDK_HOME` / `NDK_HOME`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<PathBuf>,
    /// Platform API level directory, e.g. `android-16`.
    pub platform: String,
    /// Sysroot layout selection.
    pub layout: LayoutPolicy,
}

impl Default for NdkConfig {
    fn default() -> Self {
        Self {
            home: None,
            platform: DEFAULT_NDK_PLATFORM.to_string(),
            layout: LayoutPolicy::Auto,
        }
    }
}

/// Development host settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Overrides the detected host identifier (`darwin`, `win32`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// Path configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Cache directory for auxiliary tools.
    pub cache: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            cache: PathBuf::from("ndk-cache"),
        }
    }
}

/// Settings appended to the build environment by one shared loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsLayer {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub defines: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub libpath: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cflags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cxxflags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub linkflags: Vec<String>,
}

impl SettingsLayer {
    /// Appends every non-empty field to the matching sequence setting.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a target setting is not a list.
    pub fn apply(&self, env: &mut BuildEnvironment) -> NdkResult<()> {
        let fields = [
            (keys::DEFINES, &self.defines),
            (keys::INCLUDES, &self.includes),
            (keys::LIBPATH, &self.libpath),
            (keys::CFLAGS, &self.cflags),
            (keys::CXXFLAGS, &self.cxxflags),
            (keys::LINKFLAGS, &self.linkflags),
        ];

        for (key, values) in fields {
            if !values.is_empty() {
                env.append(key, values.iter().cloned())?;
            }
        }
        Ok(())
    }

    /// Formats the layer as `field = a b c` entries.
    #[must_use]
    pub fn format_entries(&self) -> Vec<(&'static str, String)> {
        [
            ("defines", &self.defines),
            ("includes", &self.includes),
            ("libpath", &self.libpath),
            ("cflags", &self.cflags),
            ("cxxflags", &self.cxxflags),
            ("linkflags", &self.linkflags),
        ]
        .into_iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(name, values)| (name, values.join(" ")))
        .collect()
    }
}

/// Settings layers by loader section name.
pub type Layers = BTreeMap<String, SettingsLayer>;
