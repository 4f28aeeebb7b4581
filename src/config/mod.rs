// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for ndk-conf.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --ini files
//! 3. local ndkconf.toml (cwd)
//! 4. NDKCONF_<SECTION>__<KEY> env vars
//! 5. CLI overrides (--ndk, --platform, --host, --set)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! NDKCONF_NDK__HOME=/sdk                → ndk.home = "/sdk"
//! NDKCONF_NDK__PLATFORM=android-16      → ndk.platform = "android-16"
//! NDKCONF_GLOBAL__OUTPUT_LOG_LEVEL=4    → global.output_log_level = 4
//! NDKCONF_LOG=...                       → ignored (not a section)
//! ```
//!
//! # Settings Layers
//!
//! ```toml
//! [layers.android]
//! defines = ["ANDROID"]
//!
//! [layers.clang]
//! cflags = ["-fPIC"]
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GlobalConfig, HostConfig, Layers, NdkConfig, PathsConfig};

/// Top-level config sections.
pub const SECTIONS: &[&str] = &["global", "ndk", "host", "paths", "layers"];

/// Process environment variables consulted when `ndk.home` is not set.
pub const NDK_HOME_ENV_VARS: &[&str] = &["ANDROID_NDK_HOME", "NDK_HOME"];

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// NDK installation.
    pub ndk: NdkConfig,
    /// Development host.
    pub host: HostConfig,
    /// Paths configuration.
    pub paths: PathsConfig,
    /// Settings layers applied by the shared loaders.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub layers: Layers,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ndk_conf::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("config/default.toml")
    ///     .add_toml_file_optional("ndkconf.toml")
    ///     .with_env_prefix("NDKCONF")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolves the NDK root from `ndk.home` or the process environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if neither is set.
    pub fn ndk_home(&self) -> Result<PathBuf> {
        self.ndk_home_with(|name| std::env::var_os(name).map(PathBuf::from))
    }

    /// Same as [`Config::ndk_home`] with an injectable variable lookup.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if no source provides a path.
    pub fn ndk_home_with<F>(&self, lookup: F) -> Result<PathBuf>
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        if let Some(home) = &self.ndk.home {
            return Ok(home.clone());
        }

        NDK_HOME_ENV_VARS
            .iter()
            .find_map(|name| lookup(name).filter(|p| !p.as_os_str().is_empty()))
            .ok_or_else(|| {
                ConfigError::MissingKey {
                    section: "ndk".to_string(),
                    key: "home".to_string(),
                }
                .into()
            })
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_ndk_options(&mut options);
        self.format_layer_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_ndk_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "ndk.home".into(),
            self.ndk
                .home
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("ndk.platform".into(), self.ndk.platform.clone());
        options.insert("ndk.layout".into(), self.ndk.layout.to_string());
        options.insert(
            "host.platform".into(),
            self.host.platform.clone().unwrap_or_default(),
        );
        options.insert(
            "paths.cache".into(),
            self.paths.cache.display().to_string(),
        );
    }

    fn format_layer_options(&self, options: &mut BTreeMap<String, String>) {
        for (name, layer) in &self.layers {
            for (field, value) in layer.format_entries() {
                options.insert(format!("layers.{name}.{field}"), value);
            }
        }
    }
}
