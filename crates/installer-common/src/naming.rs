//! Default resource naming
//!
//! Cloud resources created by the installer are named after the cluster's
//! infrastructure ID. Users may point the installer at existing resources
//! instead, in which case the explicit name is used verbatim.

/// Suffix of the default network security group name
pub const NSG_SUFFIX: &str = "nsg";

/// Suffix of the default virtual network name
pub const VNET_SUFFIX: &str = "vnet";

/// Suffix of the default compute subnet name
pub const WORKER_SUBNET_SUFFIX: &str = "worker-subnet";

/// Suffix of the default resource group name
pub const RESOURCE_GROUP_SUFFIX: &str = "rg";

/// Name a resource after the infrastructure ID: `{infra_id}-{suffix}`
pub fn infra_name(infra_id: &str, suffix: &str) -> String {
    format!("{}-{}", infra_id, suffix)
}

/// Use an explicit override when it is set and non-empty, otherwise derive
/// the default.
pub fn name_or_default(override_name: Option<&str>, default: impl FnOnce() -> String) -> String {
    match override_name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => default(),
    }
}
