//! Installer CLI library

pub mod commands;
pub mod error;

pub use error::{Error, Result};

use clap::{Parser, Subcommand};

/// Installer - generate cluster manifests from an install config
#[derive(Parser, Debug)]
#[command(name = "installer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Emit JSON structured logs
    #[arg(long, global = true, env = "INSTALLER_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate manifests into the asset directory
    Generate(commands::generate::GenerateArgs),
    /// Check an install config without generating anything
    Validate(commands::validate::ValidateArgs),
}

impl Cli {
    /// Run the CLI command
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Generate(args) => commands::generate::run(args).await.map(|_| ()),
            Commands::Validate(args) => commands::validate::run(args),
        }
    }
}
