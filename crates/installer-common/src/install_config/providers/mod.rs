//! Platform-specific settings carried by the install configuration.
//!
//! Each module holds the settings struct for one infrastructure platform.
//! Overrides are `Option<String>`; an empty string is treated as unset by
//! [`crate::naming::name_or_default`].

mod aws;
mod azure;
mod gcp;
mod ibmcloud;
mod kubevirt;
mod local;
mod openstack;
mod vsphere;

pub use aws::{AwsPlatform, C2S_REGIONS};
pub use azure::{AzureCloudName, AzurePlatform};
pub use gcp::GcpPlatform;
pub use ibmcloud::IbmCloudPlatform;
pub use kubevirt::KubevirtPlatform;
pub use local::{BareMetalPlatform, LibvirtPlatform, NonePlatform, OvirtPlatform};
pub use openstack::OpenStackPlatform;
pub use vsphere::VSpherePlatform;
