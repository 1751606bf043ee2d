//! Generator configuration

use std::env;
use std::path::PathBuf;

use clap::Parser;

use crate::template::Runtime;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "slsswag", version, about = "Generate serverless.yml and handler stubs from a Swagger/OpenAPI document")]
pub struct Cli {
    /// Swagger or OpenAPI document (YAML or JSON)
    pub input: PathBuf,

    /// Language of the generated handlers
    #[arg(value_enum)]
    pub runtime: Runtime,

    /// Directory receiving serverless.yml and the handler files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Service name written into serverless.yml
    #[arg(short, long)]
    pub service: Option<String>,

    /// Replace handler files that already exist
    #[arg(long)]
    pub force: bool,

    /// Local slsswag-sdk checkout used by generated Rust projects
    #[arg(long)]
    pub sdk_path: Option<PathBuf>,
}

/// Generator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory receiving serverless.yml and the handler files
    pub output_dir: PathBuf,

    /// `service:` in serverless.yml
    pub service_name: String,

    /// `provider.stage` in serverless.yml
    pub stage: String,

    /// `provider.region` in serverless.yml
    pub region: String,

    /// Replace handler files that already exist
    pub force: bool,

    /// Path dependency on slsswag-sdk for generated Rust projects. Without
    /// it they depend on the SDK's version.
    pub sdk_path: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            output_dir: env::var("SLSSWAG_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("output")),

            service_name: env::var("SLSSWAG_SERVICE")
                .unwrap_or_else(|_| "slsswag-service".to_string()),

            stage: env::var("SLSSWAG_STAGE")
                .unwrap_or_else(|_| "dev".to_string()),

            region: env::var("SLSSWAG_REGION")
                .unwrap_or_else(|_| "us-east-1".to_string()),

            force: env::var("SLSSWAG_FORCE")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),

            sdk_path: env::var("SLSSWAG_SDK_PATH")
                .ok()
                .map(PathBuf::from),
        }
    }

    /// Command line arguments win over the environment
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(output_dir) = &cli.output_dir {
            self.output_dir = output_dir.clone();
        }
        if let Some(service) = &cli.service {
            self.service_name = service.clone();
        }
        self.force |= cli.force;
        if let Some(sdk_path) = &cli.sdk_path {
            self.sdk_path = Some(sdk_path.clone());
        }
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
