// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Default collaborators for configuration units.
//!
//! ```text
//! StandardContext (from Config)
//!   host_platform            [host] platform | current_platform()
//!   activate_cross_toolchain <NDK_HOME>/toolchains/llvm/prebuilt/<subdir>/bin
//!                            clang, clang++, llvm-ar --> CC, CXX, AR
//!                            arch family --> CLANG_TARGET
//!   fetch_and_cache          [paths] cache
//!   loaders                  [layers.android] [layers.project]
//!                            [layers.clang]   [layers.android_clang]
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::ConfigureContext;
use crate::config::Config;
use crate::config::types::Layers;
use crate::core::cache;
use crate::core::env::{BuildEnvironment, keys};
use crate::core::host;
use crate::error::{ConfigurationError, NdkResult};

/// Settings layer applied by each shared loader, in call order.
pub const HOST_OS_LAYER: &str = "android";
pub const PROJECT_LAYER: &str = "project";
pub const COMPILER_FAMILY_LAYER: &str = "clang";
pub const ARCH_TOOLCHAIN_LAYER: &str = "android_clang";

/// Returns the Clang target triple for an architecture family.
///
/// # Errors
///
/// Returns `ConfigurationError::UnsupportedArch` for unknown families.
pub fn target_triple(arch_family: &str) -> NdkResult<&'static str> {
    match arch_family {
        "armv7" => Ok("armv7a-linux-androideabi"),
        "armv8" => Ok("aarch64-linux-android"),
        "x86" => Ok("i686-linux-android"),
        "x86_64" => Ok("x86_64-linux-android"),
        other => Err(ConfigurationError::UnsupportedArch {
            arch_family: other.to_string(),
        }
        .into()),
    }
}

/// Context backed by the loaded configuration and the NDK on disk.
#[derive(Debug, Clone)]
pub struct StandardContext {
    host: String,
    cache_dir: PathBuf,
    layers: Layers,
}

impl StandardContext {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let host = config
            .host
            .platform
            .clone()
            .unwrap_or_else(|| host::current_platform().to_string());

        Self {
            host,
            cache_dir: config.paths.cache.clone(),
            layers: config.layers.clone(),
        }
    }

    /// Overrides the development host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    fn apply_layer(&self, env: &mut BuildEnvironment, name: &str) -> NdkResult<()> {
        match self.layers.get(name) {
            Some(layer) => {
                debug!(layer = name, "applying settings layer");
                layer.apply(env).map_err(|e| {
                    ConfigurationError::LoaderFailed {
                        loader: name.to_string(),
                        message: e.to_string(),
                    }
                    .into()
                })
            }
            None => {
                debug!(layer = name, "no settings layer configured");
                Ok(())
            }
        }
    }
}

fn find_compiler(bin_dir: &Path, name: &str) -> NdkResult<PathBuf> {
    which::which_in(name, Some(bin_dir), bin_dir).map_err(|e| {
        debug!(name, dir = %bin_dir.display(), error = %e, "compiler lookup failed");
        ConfigurationError::CompilerNotFound {
            name: name.to_string(),
            dir: bin_dir.display().to_string(),
        }
        .into()
    })
}

impl ConfigureContext for StandardContext {
    fn host_platform(&self) -> &str {
        &self.host
    }

    fn activate_cross_toolchain(
        &self,
        env: &mut BuildEnvironment,
        arch_family: &str,
        host_subdir: &str,
    ) -> NdkResult<()> {
        let triple = target_triple(arch_family)?;
        let ndk_home = env.get_path(keys::NDK_HOME)?;

        let toolchain_dir = ndk_home
            .join("toolchains")
            .join("llvm")
            .join("prebuilt")
            .join(host_subdir);
        if !toolchain_dir.is_dir() {
            return Err(ConfigurationError::ToolchainNotFound {
                path: toolchain_dir.display().to_string(),
            }
            .into());
        }

        let bin_dir = toolchain_dir.join("bin");
        let cc = find_compiler(&bin_dir, "clang")?;
        let cxx = find_compiler(&bin_dir, "clang++")?;

        env.set_path(keys::TOOLCHAIN_DIR, &toolchain_dir)
            .set_path(keys::CC, &cc)
            .set_path(keys::CXX, &cxx)
            .set_str(keys::CLANG_TARGET, triple);

        match which::which_in("llvm-ar", Some(&bin_dir), &bin_dir) {
            Ok(ar) => {
                env.set_path(keys::AR, ar);
            }
            Err(_) => warn!(dir = %bin_dir.display(), "llvm-ar not found, AR left unset"),
        }

        info!(
            arch_family,
            target = triple,
            toolchain = %toolchain_dir.display(),
            "activated cross toolchain"
        );
        Ok(())
    }

    fn fetch_and_cache(&self, env: &BuildEnvironment, source: &Path) -> NdkResult<PathBuf> {
        let ndk_home = env.get_path(keys::NDK_HOME)?;
        cache::fetch_and_cache(&self.cache_dir, &ndk_home, source)
    }

    fn load_host_os_common_settings(&self, env: &mut BuildEnvironment) -> NdkResult<()> {
        self.apply_layer(env, HOST_OS_LAYER)
    }

    fn load_project_common_settings(&self, env: &mut BuildEnvironment) -> NdkResult<()> {
        self.apply_layer(env, PROJECT_LAYER)
    }

    fn load_compiler_family_common_settings(&self, env: &mut BuildEnvironment) -> NdkResult<()> {
        self.apply_layer(env, COMPILER_FAMILY_LAYER)
    }

    fn load_arch_toolchain_common_settings(&self, env: &mut BuildEnvironment) -> NdkResult<()> {
        self.apply_layer(env, ARCH_TOOLCHAIN_LAYER)
    }
}
