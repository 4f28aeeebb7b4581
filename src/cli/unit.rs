// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for commands that operate on configuration units.

use clap::Args;

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Only list units matching these names or globs, like 'android_*'.
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,
}

/// Arguments for the `abi` command.
#[derive(Debug, Clone, Args)]
pub struct AbiArgs {
    /// Unit name.
    #[arg(value_name = "UNIT")]
    pub unit: String,
}

/// Arguments for the `configure` command.
#[derive(Debug, Clone, Args)]
pub struct ConfigureArgs {
    /// Unit name, e.g. 'android_armv7_clang'.
    #[arg(value_name = "UNIT")]
    pub unit: String,

    /// Build configuration to apply on top of the common settings.
    #[arg(short = 'c', long = "configuration", value_name = "NAME", default_value = "debug")]
    pub configuration: String,

    /// Prints the environment as JSON.
    #[arg(long)]
    pub json: bool,
}
