// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        NdkError (one pointer + tag)
//!               |
//!        +------+------+
//!        v             v
//!  Configuration   ToolFetch
//!       Box           Box
//!
//! Sub-errors (unboxed internally):
//!   Configuration UnsupportedHost, ToolchainNotFound, MissingSetting, ...
//!   ToolFetch     SourceMissing, CreateDir, Copy
//!
//! ConfigError (settings file) is raised through anyhow by the loader:
//!   MissingKey, InvalidValue
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`NdkError`].
pub type NdkResult<T> = std::result::Result<T, NdkError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum NdkError {
    /// Toolchain configuration failed for a unit.
    #[error("configuration error: {0}")]
    Configuration(#[from] Box<ConfigurationError>),

    /// An auxiliary tool could not be fetched into the cache.
    #[error("tool fetch error: {0}")]
    ToolFetch(#[from] Box<ToolFetchError>),
}

impl NdkError {
    /// Returns the configuration error, if this is one.
    #[must_use]
    pub fn as_configuration(&self) -> Option<&ConfigurationError> {
        match self {
            Self::Configuration(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the tool fetch error, if this is one.
    #[must_use]
    pub fn as_tool_fetch(&self) -> Option<&ToolFetchError> {
        match self {
            Self::ToolFetch(err) => Some(err),
            _ => None,
        }
    }
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for NdkError {
                fn from(err: $error) -> Self {
                    NdkError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigurationError => Configuration,
    ToolFetchError => ToolFetch,
}

// --- Configuration Errors ---

/// Errors raised while resolving a unit's toolchain settings.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The development host has no toolchain subdirectory for this unit.
    #[error("unsupported development host '{host}' for {unit}")]
    UnsupportedHost { unit: String, host: String },

    /// No target triple is known for an architecture family.
    #[error("unsupported architecture family '{arch_family}'")]
    UnsupportedArch { arch_family: String },

    /// A required environment setting was never populated.
    #[error("missing build setting '{key}'")]
    MissingSetting { key: String },

    /// A setting holds a value of the wrong kind.
    #[error("build setting '{key}' is not a {expected}")]
    SettingType { key: String, expected: &'static str },

    /// The prebuilt toolchain directory does not exist.
    #[error("toolchain directory not found: {path}")]
    ToolchainNotFound { path: String },

    /// A compiler executable is missing from the toolchain.
    #[error("compiler '{name}' not found in {dir}")]
    CompilerNotFound { name: String, dir: String },

    /// The NDK installation could not be identified.
    #[error("invalid NDK at '{path}': {message}")]
    InvalidKit { path: String, message: String },

    /// No unit is registered under this name.
    #[error("unknown configuration unit '{0}'")]
    UnknownUnit(String),

    /// A unit with this name or arch/toolchain pair already exists.
    #[error("configuration unit '{0}' is already registered")]
    DuplicateUnit(String),

    /// A shared settings loader failed.
    #[error("{loader} settings failed: {message}")]
    LoaderFailed { loader: String, message: String },
}

// --- Tool Fetch Errors ---

/// Errors raised while copying auxiliary tools into the local cache.
#[derive(Debug, Error)]
pub enum ToolFetchError {
    /// The prebuilt file does not exist in the NDK.
    #[error("prebuilt tool not found: {path}")]
    SourceMissing { path: String },

    /// The cache directory could not be created.
    #[error("failed to create cache directory '{path}': {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Copying into the cache failed.
    #[error("failed to copy '{from}' to '{to}': {source}")]
    Copy {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Settings-file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
