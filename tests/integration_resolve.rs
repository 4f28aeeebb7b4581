// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end tests for resolving a unit against an NDK on disk.
//!
//! Builds a fake NDK tree in a temporary directory and runs the configure
//! pipeline through the standard context.

use std::path::{Path, PathBuf};

use ndk_conf::cmd::configure::{format_environment, resolve_environment};
use ndk_conf::config::Config;
use ndk_conf::core::env::{BuildEnvironment, keys};
use tempfile::TempDir;

const LEGACY_REVISION: &str = "16.1.4479499";
const UNIFIED_REVISION: &str = "21.4.7075529";

struct FakeNdk {
    root: TempDir,
    cache: TempDir,
}

impl FakeNdk {
    fn new(revision: Option<&str>) -> Self {
        let root = tempfile::tempdir().unwrap();
        let cache = tempfile::tempdir().unwrap();

        if let Some(revision) = revision {
            write_file(
                &root.path().join("source.properties"),
                &format!("Pkg.Desc = Android NDK\nPkg.Revision = {revision}\n"),
            );
        }
        write_file(
            &root.path().join("prebuilt/android-arm/gdbserver/gdbserver"),
            "gdbserver",
        );

        Self { root, cache }
    }

    fn with_toolchain(self, subdir: &str) -> Self {
        let bin = self.toolchain_dir(subdir).join("bin");
        for tool in ["clang", "clang++", "llvm-ar"] {
            write_executable(&bin.join(tool));
        }
        self
    }

    fn home(&self) -> &Path {
        self.root.path()
    }

    fn toolchain_dir(&self, subdir: &str) -> PathBuf {
        self.home().join("toolchains/llvm/prebuilt").join(subdir)
    }

    fn config(&self, host: &str, extra: &[&str]) -> Config {
        let mut loader = Config::builder()
            .set("ndk.home", self.home().display().to_string())
            .unwrap()
            .set("paths.cache", self.cache.path().display().to_string())
            .unwrap()
            .set("host.platform", host)
            .unwrap()
            .set("ndk.platform", "android-16")
            .unwrap();
        for toml in extra {
            loader = loader.add_toml_str(toml);
        }
        loader.build().unwrap()
    }
}

fn write_file(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn write_executable(path: &Path) {
    write_file(path, "#!/bin/sh\n");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
}

fn list(env: &BuildEnvironment, key: &str) -> Vec<String> {
    env.get_list(key).unwrap().to_vec()
}

// =============================================================================
// Successful resolution
// =============================================================================

#[cfg(unix)]
#[test]
fn resolve_legacy_ndk() {
    let ndk = FakeNdk::new(Some(LEGACY_REVISION)).with_toolchain("darwin-x86_64");
    let config = ndk.config("darwin", &[]);

    let env = resolve_environment(&config, "android_armv7_clang", "debug").unwrap();

    let home = ndk.home();
    let sysroot = home.join("sysroot");
    let link_root = home.join("platforms/android-16/arch-arm");

    assert_eq!(env.get_str(keys::ARCH).unwrap(), "armeabi-v7a");
    assert!(!env.get_bool(keys::IS_NDK_MODERN).unwrap());
    assert_eq!(
        list(&env, keys::INCLUDES),
        [sysroot.join("usr/include").display().to_string()]
    );
    assert_eq!(
        list(&env, keys::LIBPATH),
        [link_root.join("usr/lib").display().to_string()]
    );
    assert_eq!(
        list(&env, keys::CFLAGS),
        [
            format!("--sysroot={}", sysroot.display()),
            "-isystem".to_string(),
            sysroot
                .join("usr/include/arm-linux-androideabi")
                .display()
                .to_string(),
        ]
    );
    assert_eq!(list(&env, keys::CXXFLAGS), list(&env, keys::CFLAGS));
    assert_eq!(
        list(&env, keys::LINKFLAGS),
        [format!("--sysroot={}", link_root.display())]
    );

    assert_eq!(
        env.get_path(keys::CC).unwrap(),
        ndk.toolchain_dir("darwin-x86_64").join("bin/clang")
    );
    assert_eq!(
        env.get_str(keys::CLANG_TARGET).unwrap(),
        "armv7a-linux-androideabi"
    );
}

#[cfg(unix)]
#[test]
fn resolve_unified_ndk() {
    let ndk = FakeNdk::new(Some(UNIFIED_REVISION)).with_toolchain("windows-x86_64");
    let config = ndk.config("win32", &[]);

    let env = resolve_environment(&config, "android_armv7_clang", "release").unwrap();

    assert!(env.get_bool(keys::IS_NDK_MODERN).unwrap());
    for key in [
        keys::INCLUDES,
        keys::LIBPATH,
        keys::CFLAGS,
        keys::CXXFLAGS,
        keys::LINKFLAGS,
    ] {
        assert!(list(&env, key).is_empty(), "{key} should be empty");
    }
    assert!(env.contains(keys::CC));
}

#[cfg(unix)]
#[test]
fn resolve_caches_debugger_server() {
    let ndk = FakeNdk::new(Some(UNIFIED_REVISION)).with_toolchain("darwin-x86_64");
    let config = ndk.config("darwin", &[]);

    let env = resolve_environment(&config, "android_armv7_clang", "debug").unwrap();

    let cached = env.get_path(keys::EXT_TOOL_PATH).unwrap();
    assert_eq!(
        cached,
        ndk.cache
            .path()
            .join("prebuilt/android-arm/gdbserver/gdbserver")
    );
    assert_eq!(std::fs::read_to_string(cached).unwrap(), "gdbserver");
}

#[cfg(unix)]
#[test]
fn resolve_layout_policy_overrides_revision() {
    let ndk = FakeNdk::new(Some(UNIFIED_REVISION)).with_toolchain("darwin-x86_64");
    let config = ndk.config("darwin", &["[ndk]\nlayout = \"legacy\"\n"]);

    let env = resolve_environment(&config, "android_armv7_clang", "debug").unwrap();

    assert!(!env.get_bool(keys::IS_NDK_MODERN).unwrap());
    assert_eq!(list(&env, keys::LINKFLAGS).len(), 1);
}

#[cfg(unix)]
#[test]
fn resolve_applies_layers_after_sysroot_flags() {
    let ndk = FakeNdk::new(Some(LEGACY_REVISION)).with_toolchain("darwin-x86_64");
    let config = ndk.config(
        "darwin",
        &[r#"
[layers.android]
defines = ["ANDROID"]
linkflags = ["-llog"]

[layers.clang]
cflags = ["-fPIC"]

[layers.android_clang]
defines = ["__ARM_ARCH_7A__"]
"#],
    );

    let env = resolve_environment(&config, "android_armv7_clang", "debug").unwrap();

    assert_eq!(list(&env, keys::DEFINES), ["ANDROID", "__ARM_ARCH_7A__"]);
    let cflags = list(&env, keys::CFLAGS);
    assert!(cflags[0].starts_with("--sysroot="));
    assert_eq!(cflags.last().map(String::as_str), Some("-fPIC"));
    assert_eq!(list(&env, keys::LINKFLAGS)[1], "-llog");
}

#[cfg(unix)]
#[test]
fn resolve_serializes_to_json() {
    let ndk = FakeNdk::new(Some(LEGACY_REVISION)).with_toolchain("darwin-x86_64");
    let config = ndk.config("darwin", &[]);

    let env = resolve_environment(&config, "android_armv7_clang", "debug").unwrap();
    let json = serde_json::to_value(&env).unwrap();

    assert_eq!(json["ARCH"], "armeabi-v7a");
    assert_eq!(json["IS_NDK_MODERN"], false);
    assert_eq!(json["NDK_PLATFORM"], "android-16");
    assert_eq!(json["CFLAGS"].as_array().map(Vec::len), Some(3));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn resolve_unsupported_host() {
    let ndk = FakeNdk::new(Some(LEGACY_REVISION));
    let config = ndk.config("linux", &[]);

    let err = resolve_environment(&config, "android_armv7_clang", "debug").unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("unsupported development host 'linux'"), "{message}");
}

#[test]
fn resolve_missing_toolchain() {
    let ndk = FakeNdk::new(Some(LEGACY_REVISION));
    let config = ndk.config("darwin", &[]);

    let err = resolve_environment(&config, "android_armv7_clang", "debug").unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("toolchain directory not found"), "{message}");
}

#[test]
fn resolve_unknown_unit() {
    let ndk = FakeNdk::new(Some(LEGACY_REVISION));
    let config = ndk.config("darwin", &[]);

    let err = resolve_environment(&config, "android_mips_gcc", "debug").unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"configuration error: unknown configuration unit 'android_mips_gcc'");
}

#[test]
fn resolve_ndk_without_revision() {
    let ndk = FakeNdk::new(None);
    let config = ndk.config("darwin", &[]);

    let err = resolve_environment(&config, "android_armv7_clang", "debug").unwrap_err();

    assert!(err.to_string().contains("cannot read Pkg.Revision"));
}

#[test]
fn resolve_ndk_home_not_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::builder()
        .set("ndk.home", dir.path().join("missing").display().to_string())
        .unwrap()
        .set("host.platform", "darwin")
        .unwrap()
        .build()
        .unwrap();

    let err = resolve_environment(&config, "android_armv7_clang", "debug").unwrap_err();

    assert!(err.to_string().contains("not a directory"));
}

// =============================================================================
// Output formatting
// =============================================================================

#[test]
fn format_environment_aligns_keys() {
    let mut env = BuildEnvironment::with_compiler_defaults();
    env.set_str(keys::ARCH, "armeabi-v7a")
        .set_bool(keys::IS_NDK_MODERN, false);
    env.append(keys::CFLAGS, ["--sysroot=/sdk/sysroot", "-isystem"])
        .unwrap();

    insta::assert_snapshot!(format_environment(&env).join("\n"), @r"
    ARCH          = armeabi-v7a
    CFLAGS        = --sysroot=/sdk/sysroot -isystem
    CXXFLAGS      =
    DEFINES       =
    INCLUDES      =
    IS_NDK_MODERN = false
    LIB           =
    LIBPATH       =
    LINKFLAGS     =
    ");
}
