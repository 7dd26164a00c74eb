//! IBM Cloud VPC cloud provider config

use minijinja::context;

use installer_common::Result;

use crate::template::ConfigRenderer;

/// Path of the API key mounted into the cloud controller
pub const IBMCLOUD_API_KEY_PATH: &str = "/etc/vpc/ibmcloud_api_key";

const TEMPLATE: &str = r#"[global]
version = 1.1.0
[kubernetes]
config-file = ""
[provider]
accountID = {{ account_id }}
clusterID = {{ infra_id }}
cluster-default-provider = g2
region = {{ region }}
g2Credentials = {{ api_key_path }}
g2ResourceGroupName = {{ infra_id }}
g2VpcName = {{ infra_id }}-vpc
g2workerServiceAccountID = {{ account_id }}
"#;

/// Render the IBM Cloud VPC cloud provider config
pub fn cloud_provider_config(infra_id: &str, account_id: &str, region: &str) -> Result<String> {
    ConfigRenderer::new().render(
        "IBM Cloud",
        TEMPLATE,
        context! {
            infra_id => infra_id,
            account_id => account_id,
            region => region,
            api_key_path => IBMCLOUD_API_KEY_PATH,
        },
    )
}
