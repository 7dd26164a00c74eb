//! Install configuration
//!
//! The user-supplied `install-config.yaml` is the root of the asset graph.
//! It is loaded from the asset directory and never generated.

mod platform;
pub mod providers;

pub use platform::Platform;
pub use providers::*;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::asset::{Asset, AssetKind, File, FileFetcher, Parents, WritableAsset};
use crate::session::PlatformClients;
use crate::{Error, Result};

/// File name of the install configuration in the asset directory
pub const INSTALL_CONFIG_FILENAME: &str = "install-config.yaml";

/// API version of the install configuration schema
pub const INSTALL_CONFIG_API_VERSION: &str = "v1";

fn default_api_version() -> String {
    INSTALL_CONFIG_API_VERSION.to_string()
}

/// Metadata of the install configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ConfigMetadata {
    /// Cluster name
    #[serde(default)]
    pub name: String,
}

/// The resolved install configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstallConfigSpec {
    /// Schema version
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Cluster metadata
    #[serde(default)]
    pub metadata: ConfigMetadata,

    /// Base DNS domain of the cluster
    #[serde(default)]
    pub base_domain: String,

    /// Additional PEM-encoded CA bundle the cluster should trust
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_trust_bundle: Option<String>,

    /// Selected infrastructure platform, `None` when unset
    #[serde(
        default,
        with = "serde_yaml::with::singleton_map",
        skip_serializing_if = "Option::is_none"
    )]
    pub platform: Option<Platform>,
}

impl InstallConfigSpec {
    /// Parse and validate an install configuration document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let spec: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::validation(format!("invalid install config: {}", e)))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Validate fields that serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if self.metadata.name.is_empty() {
            return Err(Error::validation_for_field(
                "metadata.name",
                "cluster name is required",
            ));
        }

        match &self.platform {
            Some(Platform::Azure(azure)) => {
                if azure.is_stack_cloud()
                    && azure.arm_endpoint.as_deref().unwrap_or_default().is_empty()
                {
                    return Err(Error::validation_for_field(
                        "platform.azure.armEndpoint",
                        "armEndpoint is required for AzureStackCloud",
                    ));
                }
            }
            Some(Platform::VSphere(vsphere)) => {
                if vsphere.datacenter.is_empty() {
                    return Err(Error::validation_for_field(
                        "platform.vsphere.datacenter",
                        "datacenter is required",
                    ));
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// The additional trust bundle, if one is configured and non-empty
    pub fn trust_bundle(&self) -> Option<&str> {
        self.additional_trust_bundle
            .as_deref()
            .filter(|bundle| !bundle.is_empty())
    }

    /// Name of the selected platform, if any
    pub fn platform_name(&self) -> Option<&'static str> {
        self.platform.as_ref().map(Platform::name)
    }
}

/// The install configuration asset
///
/// Carries the parsed configuration together with the lookup capabilities
/// downstream assets use to reach the selected platform.
#[derive(Clone, Debug, Default)]
pub struct InstallConfig {
    /// The parsed install configuration
    pub config: InstallConfigSpec,
    /// Platform lookups (sessions, account IDs)
    pub clients: PlatformClients,
    file: Option<File>,
}

impl InstallConfig {
    /// Create the asset from an already parsed configuration
    pub fn new(config: InstallConfigSpec, clients: PlatformClients) -> Self {
        Self {
            config,
            clients,
            file: None,
        }
    }

    /// Create the asset with an empty configuration and the given clients,
    /// to be filled by [`WritableAsset::load`]
    pub fn with_clients(clients: PlatformClients) -> Self {
        Self {
            clients,
            ..Default::default()
        }
    }
}

#[async_trait]
impl Asset for InstallConfig {
    fn name(&self) -> &'static str {
        "Install Config"
    }

    fn dependencies(&self) -> Vec<AssetKind> {
        Vec::new()
    }

    async fn generate(&mut self, _parents: &Parents) -> Result<()> {
        Err(Error::validation(format!(
            "{} must be provided in the asset directory",
            INSTALL_CONFIG_FILENAME
        )))
    }
}

impl WritableAsset for InstallConfig {
    fn files(&self) -> Vec<&File> {
        self.file.iter().collect()
    }

    fn load(&mut self, fetcher: &dyn FileFetcher) -> Result<bool> {
        let Some(file) = fetcher.fetch_by_name(INSTALL_CONFIG_FILENAME)? else {
            return Ok(false);
        };
        let yaml = std::str::from_utf8(&file.data).map_err(|e| {
            Error::validation(format!("{} is not valid UTF-8: {}", INSTALL_CONFIG_FILENAME, e))
        })?;
        self.config = InstallConfigSpec::from_yaml(yaml)?;
        debug!(
            cluster = %self.config.metadata.name,
            platform = self.config.platform_name().unwrap_or("unset"),
            "loaded install config"
        );
        self.file = Some(file);
        Ok(true)
    }
}
