// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LayoutPolicy, NdkKit, NdkRevision, SysrootLayout};
use crate::core::env::{BuildEnvironment, keys};

fn kit_with_properties(content: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("source.properties"), content).unwrap();
    dir
}

#[test]
fn test_parse_revision() {
    let content = "Pkg.Desc = Android NDK\nPkg.Revision = 21.4.7075529\n";
    let revision = NdkRevision::parse_properties(content).unwrap();

    assert_eq!(revision.to_string(), "21.4.7075529");
    assert_eq!(revision.layout(), SysrootLayout::Unified);
}

#[test]
fn test_parse_revision_without_build() {
    let revision = NdkRevision::parse_properties("Pkg.Revision = 16.1").unwrap();
    assert_eq!(revision.to_string(), "16.1.0");
    assert_eq!(revision.layout(), SysrootLayout::Legacy);
}

#[test]
fn test_parse_revision_missing() {
    assert!(NdkRevision::parse_properties("Pkg.Desc = Android NDK").is_none());
}

#[test]
fn test_layout_boundary() {
    let r18 = NdkRevision::parse_properties("Pkg.Revision = 18.1.5063045").unwrap();
    let r19 = NdkRevision::parse_properties("Pkg.Revision = 19.0.5232133").unwrap();
    assert_eq!(r18.layout(), SysrootLayout::Legacy);
    assert_eq!(r19.layout(), SysrootLayout::Unified);
}

#[test]
fn test_detect_auto() {
    let dir = kit_with_properties("Pkg.Revision = 17.2.4988734\n");
    let kit = NdkKit::detect(dir.path(), LayoutPolicy::Auto).unwrap();

    assert_eq!(kit.layout(), SysrootLayout::Legacy);
    assert_eq!(kit.revision().map(|r| r.major), Some(17));
}

#[test]
fn test_detect_policy_overrides_revision() {
    let dir = kit_with_properties("Pkg.Revision = 17.2.4988734\n");
    let kit = NdkKit::detect(dir.path(), LayoutPolicy::Unified).unwrap();

    assert_eq!(kit.layout(), SysrootLayout::Unified);
    assert_eq!(kit.revision().map(|r| r.major), Some(17));
}

#[test]
fn test_detect_auto_without_properties_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = NdkKit::detect(dir.path(), LayoutPolicy::Auto).unwrap_err();
    assert!(err.as_configuration().is_some());

    let kit = NdkKit::detect(dir.path(), LayoutPolicy::Legacy).unwrap();
    assert!(kit.revision().is_none());
}

#[test]
fn test_detect_missing_home_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(NdkKit::detect(missing, LayoutPolicy::Unified).is_err());
}

#[test]
fn test_seed_and_read_back() {
    let kit = NdkKit::new("/sdk", SysrootLayout::Legacy);
    let mut env = BuildEnvironment::new();
    kit.seed(&mut env, "android-16");

    assert_eq!(env.get_str(keys::NDK_HOME).unwrap(), "/sdk");
    assert_eq!(env.get_str(keys::NDK_PLATFORM).unwrap(), "android-16");
    assert_eq!(
        SysrootLayout::from_env(&env).unwrap(),
        SysrootLayout::Legacy
    );
}

#[test]
fn test_layout_from_env_requires_flag() {
    let env = BuildEnvironment::new();
    assert!(SysrootLayout::from_env(&env).is_err());
}
