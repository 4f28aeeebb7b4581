// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! NDK installation detection.
//!
//! ```text
//! <home>/source.properties
//!   Pkg.Revision = 21.4.7075529 --> NdkRevision { 21, 4, 7075529 }
//!        |
//!        v
//! LayoutPolicy (auto | legacy | unified)
//!        |
//!        v
//! SysrootLayout: major < 19 -> Legacy, else Unified
//!        |
//!        v
//! seed(env): NDK_HOME, IS_NDK_MODERN, NDK_PLATFORM
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::env::{BuildEnvironment, keys};
use crate::error::{ConfigurationError, NdkResult};

/// First NDK release that ships a unified sysroot for all API levels.
pub const UNIFIED_SYSROOT_MAJOR: u32 = 19;

/// Sysroot layout of an NDK, selected once during kit detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SysrootLayout {
    /// Headers and libraries split per platform API level; units must
    /// inject `--sysroot` themselves.
    Legacy,
    /// One merged sysroot inside the LLVM toolchain.
    Unified,
}

impl SysrootLayout {
    #[must_use]
    pub const fn from_modern_flag(is_modern: bool) -> Self {
        if is_modern { Self::Unified } else { Self::Legacy }
    }

    #[must_use]
    pub const fn is_modern(self) -> bool {
        matches!(self, Self::Unified)
    }

    /// Reads the layout recorded in the environment by [`NdkKit::seed`].
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `IS_NDK_MODERN` is missing or not a bool.
    pub fn from_env(env: &BuildEnvironment) -> NdkResult<Self> {
        env.get_bool(keys::IS_NDK_MODERN)
            .map(Self::from_modern_flag)
    }
}

impl fmt::Display for SysrootLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Unified => write!(f, "unified"),
        }
    }
}

/// How the sysroot layout is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPolicy {
    /// Derive from the NDK revision.
    #[default]
    Auto,
    Legacy,
    Unified,
}

impl fmt::Display for LayoutPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Legacy => write!(f, "legacy"),
            Self::Unified => write!(f, "unified"),
        }
    }
}

/// NDK release number from `source.properties`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NdkRevision {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl NdkRevision {
    /// Parses the `Pkg.Revision` entry of a `source.properties` file.
    #[must_use]
    pub fn parse_properties(content: &str) -> Option<Self> {
        static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
        let pattern = PATTERN
            .get_or_init(|| {
                Regex::new(r"(?m)^\s*Pkg\.Revision\s*=\s*([0-9]+)\.([0-9]+)(?:\.([0-9]+))?").ok()
            })
            .as_ref()?;

        let caps = pattern.captures(content)?;
        let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse().ok());

        Some(Self {
            major: field(1)?,
            minor: field(2)?,
            build: field(3).unwrap_or(0),
        })
    }

    #[must_use]
    pub const fn layout(self) -> SysrootLayout {
        SysrootLayout::from_modern_flag(self.major >= UNIFIED_SYSROOT_MAJOR)
    }
}

impl fmt::Display for NdkRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

/// A detected NDK installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdkKit {
    home: PathBuf,
    revision: Option<NdkRevision>,
    layout: SysrootLayout,
}

impl NdkKit {
    /// Creates a kit with a known layout, without touching the filesystem.
    #[must_use]
    pub fn new(home: impl Into<PathBuf>, layout: SysrootLayout) -> Self {
        Self {
            home: home.into(),
            revision: None,
            layout,
        }
    }

    /// Detects the NDK at `home`.
    ///
    /// An explicit layout policy wins over the revision; the revision is
    /// still read when available so it can be reported.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidKit` if `home` is not a directory,
    /// or if the policy is `Auto` and no revision can be read.
    pub fn detect(home: impl Into<PathBuf>, policy: LayoutPolicy) -> NdkResult<Self> {
        let home = home.into();
        if !home.is_dir() {
            return Err(invalid_kit(&home, "not a directory"));
        }

        let revision = read_revision(&home);
        let layout = match (policy, revision) {
            (LayoutPolicy::Legacy, _) => SysrootLayout::Legacy,
            (LayoutPolicy::Unified, _) => SysrootLayout::Unified,
            (LayoutPolicy::Auto, Some(revision)) => revision.layout(),
            (LayoutPolicy::Auto, None) => {
                return Err(invalid_kit(
                    &home,
                    "cannot read Pkg.Revision from source.properties; set ndk.layout explicitly",
                ));
            }
        };

        info!(
            home = %home.display(),
            revision = ?revision,
            layout = %layout,
            "detected NDK"
        );

        Ok(Self {
            home,
            revision,
            layout,
        })
    }

    #[must_use]
    pub fn home(&self) -> &Path {
        &self.home
    }

    #[must_use]
    pub const fn revision(&self) -> Option<NdkRevision> {
        self.revision
    }

    #[must_use]
    pub const fn layout(&self) -> SysrootLayout {
        self.layout
    }

    /// Writes the kit settings consumed by configuration units.
    pub fn seed(&self, env: &mut BuildEnvironment, platform: &str) {
        env.set_path(keys::NDK_HOME, &self.home)
            .set_bool(keys::IS_NDK_MODERN, self.layout.is_modern())
            .set_str(keys::NDK_PLATFORM, platform);
    }
}

fn read_revision(home: &Path) -> Option<NdkRevision> {
    let path = home.join("source.properties");
    match std::fs::read_to_string(&path) {
        Ok(content) => NdkRevision::parse_properties(&content),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no readable source.properties");
            None
        }
    }
}

fn invalid_kit(home: &Path, message: &str) -> crate::error::NdkError {
    ConfigurationError::InvalidKit {
        path: home.display().to_string(),
        message: message.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests;
