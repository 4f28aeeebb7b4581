// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for build environment settings.
//!
//! # Architecture
//!
//! ```text
//! SettingValue: Str | Bool | List   (untagged in JSON output)
//! EnvData: BTreeMap<String, SettingValue> for deterministic order
//! keys: well-known setting names shared by all units
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known setting names.
pub mod keys {
    /// Target architecture / ABI identifier.
    pub const ARCH: &str = "ARCH";
    /// Root of the installed NDK.
    pub const NDK_HOME: &str = "NDK_HOME";
    /// Whether the NDK uses the unified sysroot layout.
    pub const IS_NDK_MODERN: &str = "IS_NDK_MODERN";
    /// Platform API level directory, e.g. `android-21`.
    pub const NDK_PLATFORM: &str = "NDK_PLATFORM";
    pub const DEFINES: &str = "DEFINES";
    pub const INCLUDES: &str = "INCLUDES";
    pub const LIB: &str = "LIB";
    pub const LIBPATH: &str = "LIBPATH";
    pub const CFLAGS: &str = "CFLAGS";
    pub const CXXFLAGS: &str = "CXXFLAGS";
    pub const LINKFLAGS: &str = "LINKFLAGS";
    /// Cached path of the auxiliary debugger server.
    pub const EXT_TOOL_PATH: &str = "EXT_TOOL_PATH";
    pub const TOOLCHAIN_DIR: &str = "TOOLCHAIN_DIR";
    pub const CLANG_TARGET: &str = "CLANG_TARGET";
    pub const CC: &str = "CC";
    pub const CXX: &str = "CXX";
    pub const AR: &str = "AR";

    /// Sequence settings that exist (empty) in a fresh compiler environment.
    pub const COMPILER_LISTS: &[&str] = &[
        DEFINES, INCLUDES, CFLAGS, CXXFLAGS, LIB, LIBPATH, LINKFLAGS,
    ];
}

/// A single build setting value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl SettingValue {
    /// Short name of the value kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
            Self::List(_) => "list",
        }
    }
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// Shared environment data for copy-on-write semantics.
#[derive(Debug, Clone, Default)]
pub(super) struct EnvData {
    vars: BTreeMap<String, SettingValue>,
}

impl EnvData {
    pub(super) const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    pub(super) const fn vars(&self) -> &BTreeMap<String, SettingValue> {
        &self.vars
    }

    pub(super) const fn vars_mut(&mut self) -> &mut BTreeMap<String, SettingValue> {
        &mut self.vars
    }
}
