// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Android ARMv7 (`armeabi-v7a`) with the NDK's Clang.
//!
//! ```text
//! ARCH = armeabi-v7a
//! host --HOST_PLATFORMS--> subdir --> activate_cross_toolchain("armv7", subdir)
//!
//! Legacy NDK (IS_NDK_MODERN = false)
//!   compile root  <NDK_HOME>/sysroot
//!     INCLUDES  += <compile root>/usr/include
//!     CFLAGS    += --sysroot=<compile root> -isystem <compile root>/usr/include/arm-linux-androideabi
//!     CXXFLAGS  += (same)
//!   link root     <NDK_HOME>/platforms/<NDK_PLATFORM>/arch-arm
//!     LIBPATH   += <link root>/usr/lib
//!     LINKFLAGS += --sysroot=<link root>
//! Unified NDK: the toolchain carries its own sysroot, nothing added
//!
//! EXT_TOOL_PATH = cache(<NDK_HOME>/prebuilt/android-arm/gdbserver/gdbserver)
//! loaders: host_os -> project -> compiler_family -> arch_toolchain
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::core::env::{BuildEnvironment, keys};
use crate::core::host::HostPlatformMap;
use crate::core::ndk::SysrootLayout;
use crate::error::NdkResult;
use crate::platform::{ConfigureContext, ToolchainUnit};

/// Android ABI produced by this unit.
pub const ANDROID_ARCH: &str = "armeabi-v7a";

/// Architecture family passed to toolchain activation.
pub const ARCH_FAMILY: &str = "armv7";

/// Development hosts with a prebuilt ARMv7 Clang toolchain.
pub const HOST_PLATFORMS: HostPlatformMap =
    HostPlatformMap::new(&[("darwin", "darwin-x86_64"), ("win32", "windows-x86_64")]);

// Older NDKs only ship `arch-arm` platform libraries for this target.
const LINK_ARCH_DIR: &str = "arch-arm";
const SYSTEM_INCLUDE_TRIPLE: &str = "arm-linux-androideabi";
const DEBUGGER_PREBUILT_DIR: &str = "android-arm";

/// Compiler and linker flags contributed by the sysroot branch.
#[derive(Debug, Default, PartialEq, Eq)]
struct SysrootFlags {
    includes: Vec<String>,
    libpath: Vec<String>,
    compile: Vec<String>,
    link: Vec<String>,
}

impl SysrootFlags {
    fn legacy(ndk_home: &Path, platform: &str) -> Self {
        let compile_root = ndk_home.join("sysroot");
        let link_root = ndk_home
            .join("platforms")
            .join(platform)
            .join(LINK_ARCH_DIR);

        let system_include = compile_root
            .join("usr")
            .join("include")
            .join(SYSTEM_INCLUDE_TRIPLE);

        Self {
            includes: vec![display(&compile_root.join("usr").join("include"))],
            libpath: vec![display(&link_root.join("usr").join("lib"))],
            compile: vec![
                format!("--sysroot={}", compile_root.display()),
                "-isystem".to_string(),
                display(&system_include),
            ],
            link: vec![format!("--sysroot={}", link_root.display())],
        }
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Configuration unit for Android ARMv7 built with Clang.
#[derive(Debug, Clone, Copy, Default)]
pub struct AndroidArmv7Clang;

impl AndroidArmv7Clang {
    pub const NAME: &'static str = "android_armv7_clang";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn apply_sysroot(env: &mut BuildEnvironment) -> NdkResult<PathBuf> {
        let ndk_home = env.get_path(keys::NDK_HOME)?;
        let layout = SysrootLayout::from_env(env)?;

        let flags = match layout {
            SysrootLayout::Unified => SysrootFlags::default(),
            SysrootLayout::Legacy => {
                SysrootFlags::legacy(&ndk_home, env.get_str(keys::NDK_PLATFORM)?)
            }
        };

        debug!(
            layout = %layout,
            compile_flags = ?flags.compile,
            link_flags = ?flags.link,
            "resolved sysroot flags"
        );

        env.append(keys::INCLUDES, flags.includes)?
            .append(keys::LIBPATH, flags.libpath)?
            .append(keys::CFLAGS, flags.compile.iter().cloned())?
            .append(keys::CXXFLAGS, flags.compile)?
            .append(keys::LINKFLAGS, flags.link)?;

        Ok(ndk_home)
    }
}

impl ToolchainUnit for AndroidArmv7Clang {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn arch(&self) -> &'static str {
        ARCH_FAMILY
    }

    fn toolchain(&self) -> &'static str {
        "clang"
    }

    fn load_common_settings(
        &self,
        ctx: &dyn ConfigureContext,
        env: &mut BuildEnvironment,
    ) -> NdkResult<()> {
        env.set_str(keys::ARCH, ANDROID_ARCH);

        let host = ctx.host_platform();
        let host_subdir = HOST_PLATFORMS.resolve(Self::NAME, host)?;
        ctx.activate_cross_toolchain(env, ARCH_FAMILY, host_subdir)?;

        let ndk_home = Self::apply_sysroot(env)?;

        let debugger = ndk_home
            .join("prebuilt")
            .join(DEBUGGER_PREBUILT_DIR)
            .join("gdbserver")
            .join("gdbserver");
        let cached = ctx.fetch_and_cache(env, &debugger)?;
        env.set_path(keys::EXT_TOOL_PATH, &cached);
        trace!(path = %cached.display(), "debugger server cached");

        ctx.load_host_os_common_settings(env)?;
        ctx.load_project_common_settings(env)?;
        ctx.load_compiler_family_common_settings(env)?;
        ctx.load_arch_toolchain_common_settings(env)?;

        Ok(())
    }

    fn load_configuration_settings(
        &self,
        _ctx: &dyn ConfigureContext,
        _env: &mut BuildEnvironment,
        _configuration: &str,
    ) -> NdkResult<()> {
        Ok(())
    }

    fn is_available(&self, _ctx: &dyn ConfigureContext) -> bool {
        true
    }

    fn target_abi(&self) -> &'static str {
        ANDROID_ARCH
    }
}
