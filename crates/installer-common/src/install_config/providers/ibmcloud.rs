//! IBM Cloud platform settings

use serde::{Deserialize, Serialize};

/// IBM Cloud platform configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IbmCloudPlatform {
    /// IBM Cloud region (e.g., "us-south")
    pub region: String,

    /// Existing resource group to install into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_name: Option<String>,
}
