//! KubeVirt platform settings

use serde::{Deserialize, Serialize};

/// KubeVirt platform configuration
///
/// Tenant cluster machines run as virtual machines in a namespace of an
/// infrastructure cluster.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KubevirtPlatform {
    /// Namespace in the infrastructure cluster holding the tenant VMs
    pub namespace: String,

    /// Network attachment definition for the tenant machines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_name: Option<String>,
}
