//! OpenStack platform settings

use serde::{Deserialize, Serialize};

/// OpenStack platform configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpenStackPlatform {
    /// Cloud entry in clouds.yaml used for credentials
    pub cloud: String,

    /// Region of the cloud entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// External network floating IPs are allocated from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_network: Option<String>,

    /// PEM CA certificate of the cloud's API endpoints (clouds.yaml `cacert`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<String>,
}
