//! AWS platform settings

use serde::{Deserialize, Serialize};

/// Commercial Cloud Services regions.
///
/// Clusters installed here must trust an additional CA bundle for the
/// region's API endpoints.
pub const C2S_REGIONS: &[&str] = &["us-iso-east-1", "us-iso-west-1", "us-isob-east-1"];

/// AWS platform configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AwsPlatform {
    /// AWS region (e.g., "us-east-1", "us-iso-east-1")
    pub region: String,

    /// Existing subnet IDs to install into
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnets: Vec<String>,

    /// AMI ID for cluster machines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ami_id: Option<String>,
}

impl AwsPlatform {
    /// Returns true if the configured region is a C2S region
    pub fn is_c2s_region(&self) -> bool {
        C2S_REGIONS.contains(&self.region.as_str())
    }
}
