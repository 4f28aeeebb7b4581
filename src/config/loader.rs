// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)      --ini
//!   .add_toml_file(opt)      ndkconf.toml
//!   .add_toml_str()
//!   .with_env_prefix()       NDKCONF_<SECTION>__<KEY>
//!   .set() / apply_overrides --ndk, --set, ...
//!        |
//!        v
//!    build() --> Config
//! ```

use std::path::PathBuf;

use tracing::debug;

use super::{Config, SECTIONS};
use crate::error::{ConfigError, Result};

/// Separates the prefix from the section name in environment variables.
const ENV_PREFIX_SEPARATOR: &str = "_";

/// Separates nesting levels in environment variables, so that keys such as
/// `output_log_level` keep their underscores.
const ENV_SEPARATOR: &str = "__";

struct EnvSource {
    prefix: String,
    vars: config::Map<String, String>,
}

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env: Option<EnvSource>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables from the process environment.
    #[must_use]
    pub fn with_env_prefix(self, prefix: &str) -> Self {
        self.with_env_vars(prefix, std::env::vars())
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables from `vars`.
    ///
    /// Variables whose section is not a config section (e.g. `NDKCONF_LOG`)
    /// are skipped instead of failing the build.
    #[must_use]
    pub fn with_env_vars<I, K, V>(mut self, prefix: &str, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let head = format!("{}{ENV_PREFIX_SEPARATOR}", prefix.to_ascii_lowercase());

        let vars = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .filter(|(key, _)| {
                let lower = key.to_ascii_lowercase();
                let Some(rest) = lower.strip_prefix(&head) else {
                    return false;
                };
                let section = rest.split(ENV_SEPARATOR).next().unwrap_or_default();
                let known = rest.contains(ENV_SEPARATOR) && SECTIONS.contains(&section);
                if !known {
                    debug!(var = %key, "ignoring environment variable outside config sections");
                }
                known
            })
            .collect();

        self.env = Some(EnvSource {
            prefix: prefix.to_string(),
            vars,
        });
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Applies `section.key=value` overrides, as given by `--set`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if an override has no `=` or an
    /// empty key.
    pub fn apply_overrides<S: AsRef<str>>(mut self, overrides: &[S]) -> Result<Self> {
        for raw in overrides {
            let raw = raw.as_ref();
            let (key, value) = raw
                .split_once('=')
                .filter(|(key, _)| !key.trim().is_empty())
                .ok_or_else(|| ConfigError::InvalidValue {
                    section: "cli".to_string(),
                    key: "set".to_string(),
                    message: format!("expected section.key=value, got '{raw}'"),
                })?;
            self = self.set(key.trim(), value.trim())?;
        }
        Ok(self)
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - Environment variables cannot be parsed.
    /// - The merged configuration cannot be deserialized into the `Config` struct.
    pub fn build(self) -> Result<Config> {
        let builder = match self.env {
            Some(env) => self.builder.add_source(
                config::Environment::with_prefix(&env.prefix)
                    .prefix_separator(ENV_PREFIX_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .source(Some(env.vars)),
            ),
            None => self.builder,
        };
        let cfg = builder.build()?;
        let config: Config = cfg.try_deserialize()?;
        Ok(config)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
