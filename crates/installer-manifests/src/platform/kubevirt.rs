//! KubeVirt cloud provider config

use serde::Serialize;

/// Cloud provider config for clusters running on KubeVirt
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct KubevirtCloudConfig {
    /// Namespace of the infrastructure cluster holding the VMs
    pub namespace: String,
    /// Infrastructure ID, used to label the VMs
    #[serde(rename = "infraID")]
    pub infra_id: String,
}

impl KubevirtCloudConfig {
    /// Serialize the config to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_namespace_and_infra_id() {
        let config = KubevirtCloudConfig {
            namespace: "tenant-a".to_string(),
            infra_id: "abcde".to_string(),
        };
        assert_eq!(
            config.to_json().expect("config should serialize"),
            r#"{"namespace":"tenant-a","infraID":"abcde"}"#
        );
    }
}
