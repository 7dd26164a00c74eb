//! CLI commands

use std::path::Path;

use tracing::debug;

use installer_common::install_config::INSTALL_CONFIG_FILENAME;
use installer_common::{
    Asset, DirFetcher, InstallConfig, InstallConfigSpec, Parents, PlatformClients, WritableAsset,
};

use crate::{Error, Result};

pub mod generate;
pub mod validate;

/// Load the install config from `path`, or from the asset directory when no
/// path is given
pub(crate) fn load_install_config(
    dir: &Path,
    path: Option<&Path>,
    clients: PlatformClients,
) -> Result<InstallConfig> {
    if let Some(path) = path {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| installer_common::Error::io(path, e))?;
        let spec = InstallConfigSpec::from_yaml(&yaml)?;
        debug!(path = %path.display(), "loaded install config");
        return Ok(InstallConfig::new(spec, clients));
    }

    let mut install_config = InstallConfig::with_clients(clients);
    if !install_config.load(&DirFetcher::new(dir))? {
        return Err(Error::validation(format!(
            "{} not found in {}",
            INSTALL_CONFIG_FILENAME,
            dir.display()
        )));
    }
    Ok(install_config)
}

/// Generate `asset` from the parents resolved so far and make it available to
/// later assets
pub(crate) async fn resolve<A: Asset + 'static>(parents: &mut Parents, mut asset: A) -> Result<()> {
    debug!(asset = asset.name(), "generating asset");
    asset.generate(parents).await?;
    parents.insert(asset);
    Ok(())
}
