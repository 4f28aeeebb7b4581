// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build environment management.
//!
//! # Architecture
//!
//! ```text
//! BuildEnvironment (copy-on-write BTreeMap<String, SettingValue>)
//! Sources: BuildEnvironment::new(), with_compiler_defaults()
//! Ops: set_* / get_* / append (sequence settings only)
//! ```
//!
//! - **Append-only sequences**: units extend lists, never replace them
//! - **Copy-on-write**: Clones share data until modified

pub mod container;
pub mod types;

pub use container::BuildEnvironment;
pub use types::{SettingValue, keys};
