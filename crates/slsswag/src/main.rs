//! slsswag - Main entry point
//!
//! Reads a Swagger/OpenAPI document and:
//! - Writes serverless.yml with one function per path and method
//! - Scaffolds a stub handler, response helper and test per function in the
//!   chosen language

mod config;
mod generate;
mod openapi;
mod template;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Cli, GeneratorConfig};
use crate::generate::Generator;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,slsswag=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also land here
            let _ = err.print();
            return if err.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    let config = GeneratorConfig::from_env().with_cli(&cli);
    tracing::debug!("Configuration loaded: {:?}", config);

    let result = Generator::new(config, cli.runtime)
        .and_then(|generator| generator.run(&cli.input));

    match result {
        Ok(summary) => {
            tracing::info!(
                "Generated {} functions into {:?} ({} files written, {} kept)",
                summary.functions,
                summary.manifest,
                summary.written.len(),
                summary.skipped.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Application error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
