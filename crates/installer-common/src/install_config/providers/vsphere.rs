//! vSphere platform settings

use serde::{Deserialize, Serialize};

/// vSphere platform configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VSpherePlatform {
    /// vCenter server address
    #[serde(rename = "vCenter")]
    pub v_center: String,

    /// Datacenter in vCenter
    pub datacenter: String,

    /// Default datastore for dynamic volumes
    pub default_datastore: String,

    /// Absolute path of an existing VM folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,

    /// vCenter cluster for machines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,

    /// Port group the machines attach to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    /// Absolute path of an existing resource pool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_pool: Option<String>,
}
