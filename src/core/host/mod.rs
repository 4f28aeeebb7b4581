// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Development host identification.
//!
//! ```text
//! std::env::consts::OS --> unversioned host id
//!   macos -> darwin   windows -> win32   linux -> linux
//!
//! HostPlatformMap: host id --> prebuilt toolchain subdir
//!   darwin -> darwin-x86_64   win32 -> windows-x86_64
//! ```

use tracing::debug;

use crate::error::{ConfigurationError, NdkResult};

/// Returns the unversioned identifier of the running host OS.
#[must_use]
pub fn current_platform() -> &'static str {
    unversioned_platform(std::env::consts::OS)
}

/// Maps a Rust OS name onto the host identifiers used by configuration units.
#[must_use]
pub fn unversioned_platform(os: &'static str) -> &'static str {
    match os {
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    }
}

/// Static mapping from host OS identifier to the NDK's host toolchain subdirectory.
///
/// Every host a unit claims to support must have an entry; looking up any
/// other host is a fatal configuration error.
#[derive(Debug, Clone, Copy)]
pub struct HostPlatformMap {
    entries: &'static [(&'static str, &'static str)],
}

impl HostPlatformMap {
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Returns the supported host identifiers.
    pub fn hosts(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(host, _)| *host)
    }

    /// Resolves the toolchain subdirectory for `host`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::UnsupportedHost` if `host` has no entry.
    pub fn resolve(&self, unit: &str, host: &str) -> NdkResult<&'static str> {
        let subdir = self
            .entries
            .iter()
            .find(|(h, _)| *h == host)
            .map(|(_, subdir)| *subdir)
            .ok_or_else(|| ConfigurationError::UnsupportedHost {
                unit: unit.to_string(),
                host: host.to_string(),
            })?;

        debug!(unit, host, subdir, "resolved host toolchain subdirectory");
        Ok(subdir)
    }
}
