//! Cloud provider config asset
//!
//! Produces the `openshift-config/cloud-provider-config` config map the
//! in-cluster cloud provider reads its configuration from. Platforms without
//! a cloud provider produce nothing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use k8s_openapi::api::core::v1::ConfigMap;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use tracing::{info, warn};

use installer_common::asset::{Asset, AssetKind, File, FileFetcher, Parents, WritableAsset};
use installer_common::{ClusterId, Error, InstallConfig, Result, MANIFEST_DIR};

use crate::constants::{
    CLOUD_PROVIDER_CONFIG_FILENAME, CLOUD_PROVIDER_CONFIG_NAME, CLOUD_PROVIDER_CONFIG_NAMESPACE,
};
use crate::platform::{derive_data, ProviderConfigData};

/// Human friendly name of the asset
const ASSET_NAME: &str = "Cloud Provider Config";

/// Outcome of the last generation pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenerationState {
    /// `generate` has not run yet
    #[default]
    NotGenerated,
    /// The platform needs no cloud provider config
    Skipped,
    /// The last pass failed
    Failed,
    /// The config map was generated
    Generated,
}

/// The cloud provider config asset
#[derive(Clone, Debug, Default)]
pub struct CloudProviderConfig {
    config_map: Option<ConfigMap>,
    file: Option<File>,
    state: GenerationState,
}

impl CloudProviderConfig {
    /// Create an asset that has not been generated
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcome of the last generation pass
    pub fn state(&self) -> GenerationState {
        self.state
    }

    /// The config map produced by the last successful pass
    pub fn config_map(&self) -> Option<&ConfigMap> {
        self.config_map.as_ref()
    }

    fn clear(&mut self) {
        self.config_map = None;
        self.file = None;
    }
}

/// Wrap data entries in the cloud provider config map
pub fn config_map(data: BTreeMap<String, String>) -> ConfigMap {
    ConfigMap {
        metadata: ObjectMeta {
            name: Some(CLOUD_PROVIDER_CONFIG_NAME.to_string()),
            namespace: Some(CLOUD_PROVIDER_CONFIG_NAMESPACE.to_string()),
            ..Default::default()
        },
        data: Some(data),
        ..Default::default()
    }
}

/// Path of the manifest relative to the asset directory
pub fn manifest_path() -> PathBuf {
    Path::new(MANIFEST_DIR).join(CLOUD_PROVIDER_CONFIG_FILENAME)
}

/// Serialize the config map to its manifest file
pub fn manifest_file(config_map: &ConfigMap) -> Result<File> {
    let yaml = serde_yaml::to_string(config_map).map_err(|e| {
        Error::serialization_for_kind(
            "ConfigMap",
            format!("failed to create {} manifest", ASSET_NAME),
            e,
        )
    })?;
    Ok(File::new(manifest_path(), yaml))
}

#[async_trait]
impl Asset for CloudProviderConfig {
    fn name(&self) -> &'static str {
        ASSET_NAME
    }

    fn dependencies(&self) -> Vec<AssetKind> {
        vec![
            AssetKind::InstallConfig,
            AssetKind::ClusterId,
            AssetKind::PlatformCredsCheck,
        ]
    }

    async fn generate(&mut self, parents: &Parents) -> Result<()> {
        let install_config = parents.get::<InstallConfig>()?;
        let cluster_id = parents.get::<ClusterId>()?;

        let outcome = match derive_data(install_config, &cluster_id.infra_id).await {
            Ok(ProviderConfigData::Skip { reason }) => {
                info!(
                    platform = install_config.config.platform_name().unwrap_or("unset"),
                    reason, "skipping cloud provider config"
                );
                self.clear();
                self.state = GenerationState::Skipped;
                return Ok(());
            }
            Ok(ProviderConfigData::Emit(data)) => {
                let config_map = config_map(data);
                manifest_file(&config_map).map(|file| (config_map, file))
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok((config_map, file)) => {
                info!(
                    keys = ?config_map.data.as_ref().map(|d| d.keys().collect::<Vec<_>>()),
                    file = %file.filename.display(),
                    "generated cloud provider config"
                );
                self.config_map = Some(config_map);
                self.file = Some(file);
                self.state = GenerationState::Generated;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "cloud provider config generation failed");
                self.state = GenerationState::Failed;
                Err(e)
            }
        }
    }
}

impl WritableAsset for CloudProviderConfig {
    fn files(&self) -> Vec<&File> {
        self.file.iter().collect()
    }

    /// The config map is always regenerated from its inputs
    fn load(&mut self, _fetcher: &dyn FileFetcher) -> Result<bool> {
        Ok(false)
    }
}
