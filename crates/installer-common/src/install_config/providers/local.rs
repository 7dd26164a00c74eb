//! Platforms that need no cloud provider configuration
//!
//! Bare metal, libvirt, oVirt and `none` clusters run without a cloud
//! provider config; their settings are carried for completeness.

use serde::{Deserialize, Serialize};

/// Bare metal platform configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BareMetalPlatform {
    /// Virtual IP for the API server
    #[serde(default, rename = "apiVIP", skip_serializing_if = "Option::is_none")]
    pub api_vip: Option<String>,

    /// Virtual IP for ingress
    #[serde(default, rename = "ingressVIP", skip_serializing_if = "Option::is_none")]
    pub ingress_vip: Option<String>,
}

/// Libvirt platform configuration (development only)
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LibvirtPlatform {
    /// Libvirt connection URI
    #[serde(default, rename = "URI", skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// oVirt platform configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OvirtPlatform {
    /// oVirt cluster to install into
    #[serde(default, rename = "ovirt_cluster_id", skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
}

/// User-provisioned infrastructure with no platform integration
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct NonePlatform {}
