//! Generate command

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use installer_common::{
    Asset, ClusterId, Parents, PlatformClients, PlatformCredsCheck, WritableAsset,
};
use installer_manifests::cloud_provider_config::manifest_path;
use installer_manifests::CloudProviderConfig;

use super::{load_install_config, resolve};
use crate::Result;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Asset directory holding install-config.yaml; manifests are written below it
    #[arg(long, env = "INSTALLER_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Install config to use instead of <dir>/install-config.yaml
    #[arg(long, env = "INSTALLER_INSTALL_CONFIG")]
    pub install_config: Option<PathBuf>,

    /// Reuse an existing infrastructure ID instead of generating one
    #[arg(long, env = "INSTALLER_INFRA_ID")]
    pub infra_id: Option<String>,
}

/// Generate manifests using credentials from the environment
pub async fn run(args: GenerateArgs) -> Result<Vec<PathBuf>> {
    run_with_clients(args, PlatformClients::default()).await
}

/// Generate manifests with the given platform lookups.
///
/// Returns the paths of the written files.
pub async fn run_with_clients(
    args: GenerateArgs,
    clients: PlatformClients,
) -> Result<Vec<PathBuf>> {
    let install_config = load_install_config(&args.dir, args.install_config.as_deref(), clients)?;

    let mut parents = Parents::new();
    parents.insert(install_config);

    match args.infra_id {
        Some(infra_id) => parents.insert(ClusterId::new(infra_id)?),
        None => resolve(&mut parents, ClusterId::default()).await?,
    }
    resolve(&mut parents, PlatformCredsCheck).await?;

    let mut cloud_provider_config = CloudProviderConfig::new();
    cloud_provider_config.generate(&parents).await?;

    let mut written = Vec::new();
    for file in cloud_provider_config.files() {
        let path = file.write_to(&args.dir)?;
        println!("  wrote {}", path.display());
        written.push(path);
    }
    if written.is_empty() {
        remove_stale(&args.dir.join(manifest_path()))?;
    }
    info!(
        asset = cloud_provider_config.name(),
        files = written.len(),
        "manifests generated"
    );
    Ok(written)
}

/// Remove a manifest left by an earlier run whose asset now produces nothing
fn remove_stale(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            info!(path = %path.display(), "removed stale manifest");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(installer_common::Error::io(path, e).into()),
    }
}
