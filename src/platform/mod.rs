// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Architecture/toolchain configuration units.
//!
//! ```text
//! UnitRegistry --(arch, toolchain) / name--> dyn ToolchainUnit
//!                                              |
//! configure(unit, ctx, base_env)               v
//!   env = base_env.clone()  (copy-on-write)  load_common_settings(ctx, env)
//!   ok  --> env                               load_configuration_settings(...)
//!   err --> drop env, propagate unchanged
//!
//! ConfigureContext: host id, toolchain activation, tool cache,
//!                   four shared loaders (os, project, compiler, arch)
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::env::BuildEnvironment;
use crate::error::NdkResult;

pub mod loaders;
pub mod registry;
pub mod units;

/// Services a unit consumes from the surrounding build system.
///
/// Every method may mutate the shared environment; none of their failures
/// are caught by units.
pub trait ConfigureContext {
    /// Unversioned identifier of the development host (`darwin`, `win32`, ...).
    fn host_platform(&self) -> &str;

    /// Locates and registers the cross compiler for an architecture family.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the toolchain cannot be found.
    fn activate_cross_toolchain(
        &self,
        env: &mut BuildEnvironment,
        arch_family: &str,
        host_subdir: &str,
    ) -> NdkResult<()>;

    /// Copies a prebuilt tool into the local cache and returns its cached path.
    ///
    /// # Errors
    ///
    /// Returns a tool fetch error if the file cannot be retrieved or cached.
    fn fetch_and_cache(&self, env: &BuildEnvironment, source: &Path) -> NdkResult<PathBuf>;

    /// Settings shared by every unit of the target OS family.
    ///
    /// # Errors
    ///
    /// Returns the loader's own configuration error.
    fn load_host_os_common_settings(&self, env: &mut BuildEnvironment) -> NdkResult<()>;

    /// Settings shared by every unit of the project.
    ///
    /// # Errors
    ///
    /// Returns the loader's own configuration error.
    fn load_project_common_settings(&self, env: &mut BuildEnvironment) -> NdkResult<()>;

    /// Settings shared by every unit using the same compiler family.
    ///
    /// # Errors
    ///
    /// Returns the loader's own configuration error.
    fn load_compiler_family_common_settings(&self, env: &mut BuildEnvironment) -> NdkResult<()>;

    /// Settings shared by every unit of the OS/compiler combination.
    ///
    /// # Errors
    ///
    /// Returns the loader's own configuration error.
    fn load_arch_toolchain_common_settings(&self, env: &mut BuildEnvironment) -> NdkResult<()>;
}

/// One architecture x toolchain configuration combination.
pub trait ToolchainUnit: Send + Sync {
    /// Unit name, e.g. `android_armv7_clang`.
    fn name(&self) -> &'static str;

    /// Architecture family, e.g. `armv7`.
    fn arch(&self) -> &'static str;

    /// Toolchain variant, e.g. `clang`.
    fn toolchain(&self) -> &'static str;

    /// Applies compiler and linker settings shared by all build configurations.
    ///
    /// # Errors
    ///
    /// Propagates configuration and tool fetch errors unchanged. `env` may be
    /// partially mutated on failure.
    fn load_common_settings(
        &self,
        ctx: &dyn ConfigureContext,
        env: &mut BuildEnvironment,
    ) -> NdkResult<()>;

    /// Applies overrides for one build configuration (`debug`, `release`, ...).
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the overrides cannot be applied.
    fn load_configuration_settings(
        &self,
        ctx: &dyn ConfigureContext,
        env: &mut BuildEnvironment,
        configuration: &str,
    ) -> NdkResult<()>;

    /// Whether this combination can be configured on the current host.
    fn is_available(&self, ctx: &dyn ConfigureContext) -> bool;

    /// Android ABI produced by this unit.
    fn target_abi(&self) -> &'static str;
}

/// Runs a unit against a copy of `base_env` and returns the configured copy.
///
/// `base_env` is never modified. On failure the partially configured copy is
/// discarded and the unit's error is returned as-is.
///
/// # Errors
///
/// Returns whatever error the unit or its collaborators raised.
pub fn configure(
    unit: &dyn ToolchainUnit,
    ctx: &dyn ConfigureContext,
    base_env: &BuildEnvironment,
    configuration: &str,
) -> NdkResult<BuildEnvironment> {
    let mut env = base_env.clone();

    debug!(unit = unit.name(), configuration, "loading common settings");
    unit.load_common_settings(ctx, &mut env)?;

    debug!(unit = unit.name(), configuration, "loading configuration settings");
    unit.load_configuration_settings(ctx, &mut env, configuration)?;

    info!(
        unit = unit.name(),
        abi = unit.target_abi(),
        configuration,
        settings = env.len(),
        "configured"
    );
    Ok(env)
}

#[cfg(test)]
pub(crate) mod test_utils;
