//! composer-codegen CLI Binary
//!
//! Regenerates (or checks) the decoder composer Context declarations.

use clap::Parser;
use composer_codegen::cli::{map_error, Cli, GeneratorOverrides, RunContext};
use composer_codegen::config::ConfigLoader;
use composer_codegen::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args and config files
    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("composer-codegen starting");

    let overrides = GeneratorOverrides {
        interface_count: cli.interface_count,
        output: cli.output.clone(),
    };
    let context = match RunContext::new(cli.root.clone(), cli.config.clone(), overrides) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command()) {
        Ok(output) => {
            info!("Command completed successfully");
            print!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and config files.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    // A broken config falls back to default logging here; RunContext::new reports the error.
    let mut config = ConfigLoader::load_with(&cli.root, cli.config.as_deref())
        .ok()
        .map(|c| c.logging)
        .unwrap_or_default();

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
