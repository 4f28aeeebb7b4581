// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging for `ndkconf`, built on `tracing`.
//!
//! ```text
//! LogConfig --> init_logging --> registry().with(Vec<BoxedLayer>)
//!                                   |
//!                 +-----------------+------------------+
//!                 v                                    v
//!         console (stderr)                     file (optional)
//!         console_level | NDK_CONF_LOG         file_level
//!         plain text, optional timestamps      JSON lines, non_blocking
//!
//! LogGuard flushes the file writer on drop.
//! ```
//!
//! stdout is reserved for command output (`configure --json`).

use std::path::{Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::{self, format::FmtSpan};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::error::{ConfigError, Result};

/// Environment variable that replaces the console filter with an
/// `EnvFilter` directive, e.g. `NDK_CONF_LOG=ndk_conf::platform=trace`.
pub const LOG_ENV_VAR: &str = "NDK_CONF_LOG";

/// Verbosity, written as 0-6 in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum LogLevel {
    Silent = 0,
    Error = 1,
    Warn = 2,
    /// Kit detection, toolchain activation and cache copies.
    #[default]
    Info = 3,
    /// Every resolved path and loader step.
    Debug = 4,
    Trace = 5,
    /// Same filter as `Trace`.
    Dump = 6,
}

impl LogLevel {
    const ALL: [Self; 7] = [
        Self::Silent,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
        Self::Dump,
    ];

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// `EnvFilter` directive for this level.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Silent => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace | Self::Dump => "trace",
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(level: u8) -> std::result::Result<Self, ConfigError> {
        Self::ALL
            .get(usize::from(level))
            .copied()
            .ok_or_else(|| ConfigError::InvalidValue {
                section: "global".to_string(),
                key: "log_level".to_string(),
                message: format!("log level must be 0-6, got {level}"),
            })
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.as_u8()
    }
}

/// Logging setup derived from the `[global]` config section.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::Info)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::Trace)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file), into)]
    log_file: Option<PathBuf>,
    #[builder(setters(name = with_show_timestamps), default = true)]
    show_timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    #[must_use]
    pub const fn show_timestamps(&self) -> bool {
        self.show_timestamps
    }
}

/// Keeps the file writer alive; pending lines are flushed on drop.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed.
///
/// # Example
///
/// ```no_run
/// use ndk_conf::logging::{LogConfig, LogLevel, init_logging};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::Debug)
///     .with_log_file("ndkconf.log")
///     .build();
///
/// let _guard = init_logging(&config)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let mut layers: Vec<BoxedLayer> = vec![console_layer(config)];

    let file_guard = match config.log_file() {
        Some(path) => {
            let (layer, guard) = file_layer(path, config.file_level())?;
            layers.push(layer);
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

fn console_layer(config: &LogConfig) -> BoxedLayer {
    let filter = console_filter(config.console_level());
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    if config.show_timestamps() {
        layer.with_filter(filter).boxed()
    } else {
        layer.without_time().with_filter(filter).boxed()
    }
}

fn file_layer(path: &Path, level: LogLevel) -> Result<(BoxedLayer, WorkerGuard)> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let layer = fmt::layer()
        .json()
        .with_writer(writer)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(EnvFilter::new(level.directive()))
        .boxed();

    Ok((layer, guard))
}

fn console_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(level.directive()))
}

#[cfg(test)]
mod tests;
