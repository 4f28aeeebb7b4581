// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test utilities for configuration unit tests.
//!
//! Provides a context that records every collaborator call instead of
//! touching an NDK on disk.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use super::ConfigureContext;
use crate::core::env::{BuildEnvironment, keys};
use crate::core::ndk::{NdkKit, SysrootLayout};
use crate::error::{ConfigurationError, NdkResult, ToolFetchError};

pub(crate) const CACHED_TOOL: &str = "/cache/gdbserver";

/// Context that logs calls in order and can be told to fail one of them.
pub(crate) struct RecordingContext {
    host: String,
    fail_on: Option<&'static str>,
    calls: RefCell<Vec<String>>,
}

impl RecordingContext {
    pub(crate) fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
            fail_on: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Makes the named call return an error after being recorded.
    pub(crate) fn failing_on(mut self, call: &'static str) -> Self {
        self.fail_on = Some(call);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Call names without their arguments.
    pub(crate) fn call_names(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|c| c.split(':').next().unwrap_or_default().to_string())
            .collect()
    }

    fn record(&self, call: &'static str, detail: String) -> NdkResult<()> {
        let entry = if detail.is_empty() {
            call.to_string()
        } else {
            format!("{call}:{detail}")
        };
        self.calls.borrow_mut().push(entry);

        if self.fail_on == Some(call) {
            return Err(ConfigurationError::LoaderFailed {
                loader: call.to_string(),
                message: "injected failure".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn loader(&self, env: &mut BuildEnvironment, name: &'static str) -> NdkResult<()> {
        self.record(name, String::new())?;
        env.append(keys::DEFINES, [name])?;
        Ok(())
    }
}

impl ConfigureContext for RecordingContext {
    fn host_platform(&self) -> &str {
        &self.host
    }

    fn activate_cross_toolchain(
        &self,
        _env: &mut BuildEnvironment,
        arch_family: &str,
        host_subdir: &str,
    ) -> NdkResult<()> {
        self.record("activate", format!("{arch_family},{host_subdir}"))
    }

    fn fetch_and_cache(&self, _env: &BuildEnvironment, source: &Path) -> NdkResult<PathBuf> {
        self.calls
            .borrow_mut()
            .push(format!("fetch:{}", source.display()));

        if self.fail_on == Some("fetch") {
            return Err(ToolFetchError::SourceMissing {
                path: source.display().to_string(),
            }
            .into());
        }
        Ok(PathBuf::from(CACHED_TOOL))
    }

    fn load_host_os_common_settings(&self, env: &mut BuildEnvironment) -> NdkResult<()> {
        self.loader(env, "host_os")
    }

    fn load_project_common_settings(&self, env: &mut BuildEnvironment) -> NdkResult<()> {
        self.loader(env, "project")
    }

    fn load_compiler_family_common_settings(&self, env: &mut BuildEnvironment) -> NdkResult<()> {
        self.loader(env, "compiler_family")
    }

    fn load_arch_toolchain_common_settings(&self, env: &mut BuildEnvironment) -> NdkResult<()> {
        self.loader(env, "arch_toolchain")
    }
}

/// Environment seeded the way `configure` receives it from the CLI.
pub(crate) fn seeded_env(home: &str, layout: SysrootLayout, platform: &str) -> BuildEnvironment {
    let mut env = BuildEnvironment::with_compiler_defaults();
    NdkKit::new(home, layout).seed(&mut env, platform);
    env
}
