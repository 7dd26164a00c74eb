//! Installer CLI
//!
//! Generates cluster manifests from an install config.

use clap::Parser;

use installer_cli::{Cli, Result};
use installer_common::telemetry::{init_telemetry, TelemetryConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_telemetry(TelemetryConfig {
        json: cli.log_json,
        ..Default::default()
    })?;

    cli.run().await
}
