//! Platform selection
//!
//! The install configuration selects exactly one infrastructure platform.
//! In YAML this is a single key under `platform:` (e.g. `platform: {aws: ...}`),
//! which maps onto an externally tagged enum.

use serde::{Deserialize, Serialize};

use super::providers::{
    AwsPlatform, AzurePlatform, BareMetalPlatform, GcpPlatform, IbmCloudPlatform,
    KubevirtPlatform, LibvirtPlatform, NonePlatform, OpenStackPlatform, OvirtPlatform,
    VSpherePlatform,
};

/// The infrastructure platform a cluster is installed on
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Amazon Web Services
    Aws(AwsPlatform),
    /// Microsoft Azure, including Azure Stack Hub
    Azure(AzurePlatform),
    /// Bare metal hosts
    BareMetal(BareMetalPlatform),
    /// Google Cloud Platform
    Gcp(GcpPlatform),
    /// IBM Cloud VPC
    IbmCloud(IbmCloudPlatform),
    /// KubeVirt virtual machines in an infrastructure cluster
    Kubevirt(KubevirtPlatform),
    /// Libvirt (development only)
    Libvirt(LibvirtPlatform),
    /// No platform integration
    None(NonePlatform),
    /// OpenStack private cloud
    OpenStack(OpenStackPlatform),
    /// oVirt / Red Hat Virtualization
    Ovirt(OvirtPlatform),
    /// VMware vSphere
    VSphere(VSpherePlatform),
}

impl Platform {
    /// Every platform tag, in the order they are documented
    pub const NAMES: &'static [&'static str] = &[
        "aws",
        "azure",
        "baremetal",
        "gcp",
        "ibmcloud",
        "kubevirt",
        "libvirt",
        "none",
        "openstack",
        "ovirt",
        "vsphere",
    ];

    /// Platform tag as used in the install configuration
    pub fn name(&self) -> &'static str {
        match self {
            Self::Aws(_) => "aws",
            Self::Azure(_) => "azure",
            Self::BareMetal(_) => "baremetal",
            Self::Gcp(_) => "gcp",
            Self::IbmCloud(_) => "ibmcloud",
            Self::Kubevirt(_) => "kubevirt",
            Self::Libvirt(_) => "libvirt",
            Self::None(_) => "none",
            Self::OpenStack(_) => "openstack",
            Self::Ovirt(_) => "ovirt",
            Self::VSphere(_) => "vsphere",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Result<Platform, serde_yaml::Error> {
        serde_yaml::with::singleton_map::deserialize(serde_yaml::Deserializer::from_str(yaml))
    }

    #[test]
    fn single_key_selects_variant() {
        let platform = parse("aws:\n  region: us-east-1\n").expect("aws platform should parse");
        assert_eq!(platform.name(), "aws");
        match platform {
            Platform::Aws(aws) => assert_eq!(aws.region, "us-east-1"),
            other => panic!("expected aws, got {other}"),
        }
    }

    #[test]
    fn none_platform_parses_from_empty_map() {
        let platform = parse("none: {}\n").expect("none should parse");
        assert_eq!(platform, Platform::None(NonePlatform {}));
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let err = parse("nutanix: {}\n").expect_err("unknown platform should fail");
        assert!(err.to_string().contains("unknown variant"));
    }

    #[test]
    fn serialized_tag_matches_name() {
        let platforms = [
            Platform::Aws(Default::default()),
            Platform::Azure(Default::default()),
            Platform::BareMetal(Default::default()),
            Platform::Gcp(Default::default()),
            Platform::IbmCloud(Default::default()),
            Platform::Kubevirt(Default::default()),
            Platform::Libvirt(Default::default()),
            Platform::None(Default::default()),
            Platform::OpenStack(Default::default()),
            Platform::Ovirt(Default::default()),
            Platform::VSphere(Default::default()),
        ];
        assert_eq!(platforms.len(), Platform::NAMES.len());
        for (platform, name) in platforms.iter().zip(Platform::NAMES) {
            let value = serde_json::to_value(platform).expect("platform should serialize");
            let tag = value
                .as_object()
                .and_then(|o| o.keys().next().cloned())
                .expect("platform should serialize as a single-key map");
            assert_eq!(tag, platform.name());
            assert_eq!(tag, *name);
        }
    }
}
