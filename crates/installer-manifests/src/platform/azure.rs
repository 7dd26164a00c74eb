//! Azure cloud provider config
//!
//! The in-tree Azure cloud provider reads a JSON document describing where
//! the cluster's network resources live and how to authenticate.

use serde::Serialize;

use installer_common::install_config::AzureCloudName;

/// Load balancer SKU on public Azure clouds
const STANDARD_LB_SKU: &str = "standard";

/// Azure Stack Hub only offers basic load balancers
const BASIC_LB_SKU: &str = "basic";

/// Backoff, in seconds, between cloud provider retries
const BACKOFF_DURATION_SECONDS: u32 = 6;

/// Inputs for the Azure cloud provider config
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AzureCloudConfig {
    /// Azure cloud environment
    pub cloud_name: AzureCloudName,
    /// Resource group holding the cluster
    pub resource_group_name: String,
    /// Region of the resource group
    pub group_location: String,
    /// Prefix of cluster resource names (the infrastructure ID)
    pub resource_prefix: String,
    /// Subscription ID
    pub subscription_id: String,
    /// Azure AD tenant ID
    pub tenant_id: String,
    /// Service principal client ID, only written for ARO
    pub aad_client_id: String,
    /// Service principal secret, only written for ARO
    pub aad_client_secret: String,
    /// Resource group of the virtual network
    pub network_resource_group_name: String,
    /// Network security group
    pub network_security_group_name: String,
    /// Virtual network
    pub virtual_network_name: String,
    /// Compute subnet
    pub subnet_name: String,
    /// Resource manager endpoint, set for Azure Stack Hub
    pub resource_manager_endpoint: String,
    /// Azure Red Hat OpenShift build
    pub aro: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigDocument<'a> {
    cloud: &'a str,
    tenant_id: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    aad_client_id: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    aad_client_secret: &'a str,
    subscription_id: &'a str,
    use_managed_identity_extension: bool,
    #[serde(rename = "userAssignedIdentityID")]
    user_assigned_identity_id: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    resource_manager_endpoint: &'a str,
    resource_group: &'a str,
    location: &'a str,
    vnet_name: &'a str,
    vnet_resource_group: &'a str,
    subnet_name: &'a str,
    security_group_name: &'a str,
    route_table_name: String,
    cloud_provider_backoff: bool,
    cloud_provider_backoff_duration: u32,
    use_instance_metadata: bool,
    load_balancer_sku: &'static str,
    #[serde(rename = "excludeMasterFromStandardLB")]
    exclude_master_from_standard_lb: bool,
}

impl AzureCloudConfig {
    /// Serialize the config as tab-indented JSON with a trailing newline
    pub fn to_json(&self) -> serde_json::Result<String> {
        let stack = self.cloud_name == AzureCloudName::AzureStackCloud;
        let (client_id, client_secret) = if self.aro {
            (self.aad_client_id.as_str(), self.aad_client_secret.as_str())
        } else {
            ("", "")
        };
        let document = ConfigDocument {
            cloud: self.cloud_name.as_str(),
            tenant_id: &self.tenant_id,
            aad_client_id: client_id,
            aad_client_secret: client_secret,
            subscription_id: &self.subscription_id,
            use_managed_identity_extension: !self.aro && !stack,
            user_assigned_identity_id: "",
            resource_manager_endpoint: if stack {
                &self.resource_manager_endpoint
            } else {
                ""
            },
            resource_group: &self.resource_group_name,
            location: &self.group_location,
            vnet_name: &self.virtual_network_name,
            vnet_resource_group: &self.network_resource_group_name,
            subnet_name: &self.subnet_name,
            security_group_name: &self.network_security_group_name,
            route_table_name: format!("{}-node-routetable", self.resource_prefix),
            cloud_provider_backoff: true,
            cloud_provider_backoff_duration: BACKOFF_DURATION_SECONDS,
            use_instance_metadata: !stack,
            load_balancer_sku: if stack { BASIC_LB_SKU } else { STANDARD_LB_SKU },
            exclude_master_from_standard_lb: false,
        };

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        document.serialize(&mut serializer)?;
        buf.push(b'\n');
        // serde_json only writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
