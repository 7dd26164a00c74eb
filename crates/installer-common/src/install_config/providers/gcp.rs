//! GCP platform settings

use serde::{Deserialize, Serialize};

/// GCP platform configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GcpPlatform {
    /// Project the cluster is installed into
    #[serde(rename = "projectID")]
    pub project_id: String,

    /// GCP region (e.g., "us-central1")
    pub region: String,

    /// Existing VPC network name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    /// Existing subnet for control plane machines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_plane_subnet: Option<String>,

    /// Existing subnet for compute machines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compute_subnet: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_id_uses_upper_case_suffix() {
        let yaml = r#"
projectID: my-project
region: us-central1
computeSubnet: workers
"#;
        let platform: GcpPlatform =
            serde_yaml::from_str(yaml).expect("GcpPlatform deserialization should succeed");
        assert_eq!(platform.project_id, "my-project");
        assert_eq!(platform.compute_subnet.as_deref(), Some("workers"));
        assert!(platform.network.is_none());
    }
}
