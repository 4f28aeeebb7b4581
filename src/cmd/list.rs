// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Unit listing and ABI queries.

use crate::cli::unit::{AbiArgs, ListArgs};
use crate::config::Config;
use crate::error::Result;
use crate::platform::ConfigureContext;
use crate::platform::loaders::StandardContext;
use crate::platform::registry::UnitRegistry;

/// Formats one line per unit: name, ABI, and availability on the host.
///
/// # Errors
///
/// Returns an error if a pattern is not a valid glob.
pub fn format_units<S: AsRef<str>>(
    registry: &UnitRegistry,
    ctx: &dyn ConfigureContext,
    patterns: &[S],
) -> Result<Vec<String>> {
    let names = if patterns.is_empty() {
        registry.names().collect()
    } else {
        registry.resolve(patterns)?
    };

    let width = names.iter().map(|name| name.len()).max().unwrap_or(0);

    names
        .into_iter()
        .map(|name| -> Result<String> {
            let unit = registry.get(name)?;
            let availability = if unit.is_available(ctx) {
                "available"
            } else {
                "unavailable"
            };
            Ok(format!(
                "{name:<width$}  {:<12}  {availability}",
                unit.target_abi()
            ))
        })
        .collect()
}

/// Main handler for list command.
///
/// # Errors
///
/// Returns an error if unit resolution fails.
pub fn run_list_command(args: &ListArgs, config: &Config) -> Result<()> {
    let registry = UnitRegistry::with_builtin_units();
    let ctx = StandardContext::from_config(config);

    let lines = format_units(&registry, &ctx, &args.patterns)?;
    if lines.is_empty() {
        println!("No units found");
    } else {
        for line in &lines {
            println!("{line}");
        }
    }
    Ok(())
}

/// Main handler for abi command.
///
/// # Errors
///
/// Returns an error if the unit is unknown.
pub fn run_abi_command(args: &AbiArgs) -> Result<()> {
    let registry = UnitRegistry::with_builtin_units();
    println!("{}", registry.get(&args.unit)?.target_abi());
    Ok(())
}
