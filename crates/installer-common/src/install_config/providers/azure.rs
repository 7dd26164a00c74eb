//! Azure platform settings

use serde::{Deserialize, Serialize};

use crate::naming::{infra_name, name_or_default, RESOURCE_GROUP_SUFFIX};

/// Azure cloud environment the cluster is installed into
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum AzureCloudName {
    /// Azure public cloud
    #[default]
    AzurePublicCloud,
    /// Azure US government cloud
    #[serde(rename = "AzureUSGovernmentCloud")]
    AzureUsGovernmentCloud,
    /// Azure China cloud
    AzureChinaCloud,
    /// Azure German cloud
    AzureGermanCloud,
    /// Azure Stack Hub, an on-premises Azure deployment with its own endpoints
    AzureStackCloud,
}

impl AzureCloudName {
    /// Name as it appears in Azure configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AzurePublicCloud => "AzurePublicCloud",
            Self::AzureUsGovernmentCloud => "AzureUSGovernmentCloud",
            Self::AzureChinaCloud => "AzureChinaCloud",
            Self::AzureGermanCloud => "AzureGermanCloud",
            Self::AzureStackCloud => "AzureStackCloud",
        }
    }
}

impl std::fmt::Display for AzureCloudName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Azure platform configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AzurePlatform {
    /// Azure region (e.g., "centralus")
    pub region: String,

    /// Cloud environment
    #[serde(default)]
    pub cloud_name: AzureCloudName,

    /// Resource group holding the base domain's DNS zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_domain_resource_group_name: Option<String>,

    /// Existing resource group to install the cluster into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_name: Option<String>,

    /// Resource group of an existing virtual network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_resource_group_name: Option<String>,

    /// Existing virtual network name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_network: Option<String>,

    /// Existing subnet for control plane machines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_plane_subnet: Option<String>,

    /// Existing subnet for compute machines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compute_subnet: Option<String>,

    /// Resource manager endpoint, required for Azure Stack Hub
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arm_endpoint: Option<String>,
}

impl AzurePlatform {
    /// Resource group the cluster's resources live in.
    ///
    /// Uses the configured resource group when set, otherwise `{infra_id}-rg`.
    pub fn cluster_resource_group_name(&self, infra_id: &str) -> String {
        name_or_default(self.resource_group_name.as_deref(), || {
            infra_name(infra_id, RESOURCE_GROUP_SUFFIX)
        })
    }

    /// Returns true when installing into Azure Stack Hub
    pub fn is_stack_cloud(&self) -> bool {
        self.cloud_name == AzureCloudName::AzureStackCloud
    }
}
