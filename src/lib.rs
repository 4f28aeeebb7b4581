// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        configure / list / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!                        platform
//!             registry / units / loaders
//!                            |
//!                   android_armv7_clang
//!
//!   +-----------------------------------------+
//!   |  core   env, host, ndk, cache           |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod platform;
