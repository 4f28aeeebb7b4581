// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for ndk-conf using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! ndkconf [global options] <command>
//! version
//! options
//! inis
//! list [patterns...]
//! abi <unit>
//! configure <unit> [-c configuration] [--json]
//! ```

pub mod global;
pub mod unit;


use crate::cli::global::GlobalOptions;
use crate::cli::unit::{AbiArgs, ConfigureArgs, ListArgs};
use clap::{Parser, Subcommand};

/// Android NDK toolchain configuration.
#[derive(Debug, Parser)]
#[command(
    name = "ndkconf",
    author,
    version,
    about = "Android NDK toolchain configuration",
    long_about = "ndk-conf Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Resolves compiler, linker, include and library settings for\n\
                  cross-compiling to Android with an installed NDK.\n\n\
                  Do `ndkconf configure android_armv7_clang` to print the build\n\
                  environment of a unit. See `ndkconf <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  ndkconf loads every --ini file in order, then `ndkconf.toml` in\n\
                  the current directory if it exists, then NDKCONF_* environment\n\
                  variables. Later sources override earlier ones; command-line\n\
                  options override all of them. Use --no-default-inis to skip\n\
                  `ndkconf.toml` and the environment."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by ndkconf.
    Inis,

    /// Lists configuration units.
    List(ListArgs),

    /// Prints the Android ABI produced by a unit.
    Abi(AbiArgs),

    /// Resolves the build environment of a unit.
    Configure(ConfigureArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
