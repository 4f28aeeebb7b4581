// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Built-in configuration units.

pub mod android_armv7_clang;

pub use android_armv7_clang::AndroidArmv7Clang;
