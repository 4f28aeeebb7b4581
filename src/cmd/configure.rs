// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configure command implementation.
//!
//! ```text
//! Config --> ndk_home() --> NdkKit::detect(layout policy)
//!        --> seed(BuildEnvironment::with_compiler_defaults())
//!        --> UnitRegistry::get(unit) --> platform::configure(unit, StandardContext)
//!        --> print (KEY = value | JSON)
//! ```

use anyhow::{Context, bail};
use tracing::info;

use crate::cli::unit::ConfigureArgs;
use crate::config::Config;
use crate::core::env::{BuildEnvironment, SettingValue};
use crate::core::ndk::NdkKit;
use crate::error::Result;
use crate::platform::configure;
use crate::platform::loaders::StandardContext;
use crate::platform::registry::UnitRegistry;

/// Detects the NDK and runs one unit, returning the resulting environment.
///
/// # Errors
///
/// Returns an error if the NDK cannot be found or detected, the unit is
/// unknown or unavailable on this host, or configuration fails.
pub fn resolve_environment(
    config: &Config,
    unit_name: &str,
    configuration: &str,
) -> Result<BuildEnvironment> {
    let registry = UnitRegistry::with_builtin_units();
    let unit = registry.get(unit_name)?;
    let ctx = StandardContext::from_config(config);

    if !unit.is_available(&ctx) {
        bail!("unit '{unit_name}' is not available on this host");
    }

    let home = config.ndk_home()?;
    let kit = NdkKit::detect(&home, config.ndk.layout)?;

    let mut base = BuildEnvironment::with_compiler_defaults();
    kit.seed(&mut base, &config.ndk.platform);

    info!(
        unit = unit_name,
        configuration,
        ndk = %home.display(),
        platform = %config.ndk.platform,
        "configuring"
    );

    let env = configure(unit, &ctx, &base, configuration)
        .with_context(|| format!("failed to configure {unit_name}"))?;
    Ok(env)
}

/// Formats the environment as aligned `KEY = value` lines.
///
/// Lists are space-joined; empty lists are shown as empty values.
#[must_use]
pub fn format_environment(env: &BuildEnvironment) -> Vec<String> {
    let width = env.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    env.iter()
        .map(|(key, value)| {
            let value = match value {
                SettingValue::List(items) => items.join(" "),
                other => other.to_string(),
            };
            format!("{key:<width$} = {value}").trim_end().to_string()
        })
        .collect()
}

/// Main handler for configure command.
///
/// # Errors
///
/// Returns an error if configuration fails or JSON output cannot be produced.
pub fn run_configure_command(args: &ConfigureArgs, config: &Config) -> Result<()> {
    let env = resolve_environment(config, &args.unit, &args.configuration)?;

    if args.json {
        let json = serde_json::to_string_pretty(&env).context("failed to serialize environment")?;
        println!("{json}");
    } else {
        for line in format_environment(&env) {
            println!("{line}");
        }
    }
    Ok(())
}
