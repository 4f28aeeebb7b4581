// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Options | Inis | List | Abi | Configure
//! ```

use std::process::ExitCode;

use ndk_conf::cli::global::GlobalOptions;
use ndk_conf::cli::{self, Command};
use ndk_conf::cmd::config::{run_inis_command, run_options_command};
use ndk_conf::cmd::configure::run_configure_command;
use ndk_conf::cmd::list::{run_abi_command, run_list_command};
use ndk_conf::config::Config;
use ndk_conf::config::loader::ConfigLoader;
use ndk_conf::logging::LogConfig;
use ndk_conf::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let command = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            return ExitCode::SUCCESS;
        }
        Some(command) => command,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            return ExitCode::FAILURE;
        }
    };

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let loaded_files = loader.format_loaded_files();

    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(command, &config, &loaded_files)
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .with_show_timestamps(false)
        .build()
}

fn dispatch_command(command: &Command, config: &Config, loaded_files: &[String]) -> ExitCode {
    let result = match command {
        Command::Version => {
            handle_version_command();
            Ok(())
        }
        Command::Options => {
            run_options_command(config);
            Ok(())
        }
        Command::Inis => {
            run_inis_command(loaded_files);
            Ok(())
        }
        Command::List(args) => run_list_command(args, config),
        Command::Abi(args) => run_abi_command(args),
        Command::Configure(args) => run_configure_command(args, config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ndk_conf::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    if !global.no_default_inis {
        loader = loader
            .add_toml_file_optional("ndkconf.toml")
            .with_env_prefix("NDKCONF");
    }
    loader.apply_overrides(&global.to_config_overrides())
}
