// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for build environment and NDK handling.
//!
//! ```text
//!              core
//!               |
//!     +---------+---------+
//!     |    |         |    |
//!     v    v         v    v
//!    env  host      ndk  cache
//!     |    |         |     |
//! BuildEnv HostMap NdkKit fetch_and_cache
//!          platform Layout
//! ```

pub mod cache;
pub mod env;
pub mod host;
pub mod ndk;
