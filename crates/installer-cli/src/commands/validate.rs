//! Validate command

use std::path::PathBuf;

use clap::Args;

use installer_common::PlatformClients;

use super::load_install_config;
use crate::Result;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Asset directory holding install-config.yaml
    #[arg(long, env = "INSTALLER_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Install config to use instead of <dir>/install-config.yaml
    #[arg(long, env = "INSTALLER_INSTALL_CONFIG")]
    pub install_config: Option<PathBuf>,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let install_config = load_install_config(
        &args.dir,
        args.install_config.as_deref(),
        PlatformClients::default(),
    )?;
    let config = &install_config.config;
    println!(
        "  {} valid (platform: {})",
        config.metadata.name,
        config.platform_name().unwrap_or("unset")
    );
    Ok(())
}
