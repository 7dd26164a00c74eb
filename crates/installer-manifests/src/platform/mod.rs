//! Per-platform derivation of the cloud provider config data
//!
//! [`derive_data`] selects the install config's platform and runs that
//! platform's rule. A rule either skips (the platform needs no cloud
//! provider config) or emits the data entries of the config map. Adding a
//! platform to [`Platform`] requires a new arm here.

pub mod azure;
pub mod gcp;
pub mod ibmcloud;
pub mod kubevirt;
pub mod openstack;
pub mod vsphere;

use std::collections::BTreeMap;

use tracing::debug;

use installer_common::install_config::{AwsPlatform, AzureCloudName, AzurePlatform, Platform};
use installer_common::naming::{
    infra_name, name_or_default, NSG_SUFFIX, VNET_SUFFIX, WORKER_SUBNET_SUFFIX,
};
use installer_common::{Error, InstallConfig, Result};

use crate::constants::{CA_BUNDLE_KEY, CONFIG_KEY, ENDPOINTS_KEY};

use self::azure::AzureCloudConfig;
use self::kubevirt::KubevirtCloudConfig;

/// Step context for payloads that fail to render or serialize
const CREATE_CONTEXT: &str = "could not create cloud provider config";

/// Outcome of a platform rule
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderConfigData {
    /// The platform needs no cloud provider config
    Skip {
        /// Why nothing is produced
        reason: &'static str,
    },
    /// Data entries of the cloud provider config map
    Emit(BTreeMap<String, String>),
}

impl ProviderConfigData {
    fn skip(reason: &'static str) -> Self {
        Self::Skip { reason }
    }

    fn config(config: String) -> Self {
        Self::Emit(BTreeMap::from([(CONFIG_KEY.to_string(), config)]))
    }
}

/// Derive the cloud provider config data for the selected platform
pub async fn derive_data(
    install_config: &InstallConfig,
    infra_id: &str,
) -> Result<ProviderConfigData> {
    let config = &install_config.config;
    let Some(platform) = &config.platform else {
        return Err(Error::unsupported_platform(None));
    };
    debug!(platform = platform.name(), infra_id, "deriving cloud provider config");

    match platform {
        Platform::Libvirt(_) | Platform::None(_) | Platform::BareMetal(_) | Platform::Ovirt(_) => {
            Ok(ProviderConfigData::skip("platform has no cloud provider"))
        }
        Platform::Aws(aws) => Ok(aws_data(aws, config.trust_bundle())),
        Platform::OpenStack(_) => {
            let (cloud_config, ca_bundle) =
                openstack::cloud_provider_config(config).map_err(|e| {
                    Error::upstream_for(
                        "openstack",
                        "failed to generate OpenStack provider config",
                        e,
                    )
                })?;
            let mut data = BTreeMap::from([(CONFIG_KEY.to_string(), cloud_config)]);
            if !ca_bundle.is_empty() {
                data.insert(CA_BUNDLE_KEY.to_string(), ca_bundle);
            }
            Ok(ProviderConfigData::Emit(data))
        }
        Platform::Azure(azure) => azure_data(install_config, azure, infra_id).await,
        Platform::Gcp(gcp) => {
            let subnet = name_or_default(gcp.compute_subnet.as_deref(), || {
                infra_name(infra_id, WORKER_SUBNET_SUFFIX)
            });
            let cloud_config = gcp::cloud_provider_config(infra_id, &gcp.project_id, &subnet)
                .map_err(|e| Error::upstream_for("gcp", CREATE_CONTEXT, e))?;
            Ok(ProviderConfigData::config(cloud_config))
        }
        Platform::IbmCloud(ibmcloud) => {
            let account_id = install_config
                .clients
                .ibmcloud
                .account_id()
                .await
                .map_err(|e| {
                    Error::upstream_for("ibmcloud", "could not get IBM Cloud account ID", e)
                })?;
            let cloud_config =
                ibmcloud::cloud_provider_config(infra_id, &account_id, &ibmcloud.region)
                    .map_err(|e| Error::upstream_for("ibmcloud", CREATE_CONTEXT, e))?;
            Ok(ProviderConfigData::config(cloud_config))
        }
        Platform::VSphere(vsphere) => {
            let folder = name_or_default(vsphere.folder.as_deref(), || {
                vsphere::default_folder(&vsphere.datacenter, infra_id)
            });
            let cloud_config = vsphere::cloud_provider_config(&folder, vsphere)
                .map_err(|e| Error::upstream_for("vsphere", CREATE_CONTEXT, e))?;
            Ok(ProviderConfigData::config(cloud_config))
        }
        Platform::Kubevirt(kubevirt) => {
            let cloud_config = KubevirtCloudConfig {
                namespace: kubevirt.namespace.clone(),
                infra_id: infra_id.to_string(),
            }
            .to_json()
            .map_err(|e| Error::serialization_with_context(CREATE_CONTEXT, e))?;
            Ok(ProviderConfigData::config(cloud_config))
        }
    }
}

/// AWS needs the config map only in C2S regions, to carry the trust bundle
/// the cloud provider uses to reach the region's endpoints
fn aws_data(aws: &AwsPlatform, trust_bundle: Option<&str>) -> ProviderConfigData {
    match trust_bundle {
        Some(bundle) if aws.is_c2s_region() => ProviderConfigData::Emit(BTreeMap::from([(
            CA_BUNDLE_KEY.to_string(),
            bundle.to_string(),
        )])),
        Some(_) => ProviderConfigData::skip("region does not need a trust bundle"),
        None => ProviderConfigData::skip("no additional trust bundle"),
    }
}

async fn azure_data(
    install_config: &InstallConfig,
    azure: &AzurePlatform,
    infra_id: &str,
) -> Result<ProviderConfigData> {
    let session = install_config
        .clients
        .azure
        .session(azure)
        .await
        .map_err(|e| Error::upstream_for("azure", "could not get azure session", e))?;

    let resource_group_name = azure.cluster_resource_group_name(infra_id);
    let network_resource_group_name =
        name_or_default(azure.network_resource_group_name.as_deref(), || {
            resource_group_name.clone()
        });
    let virtual_network_name = name_or_default(azure.virtual_network.as_deref(), || {
        infra_name(infra_id, VNET_SUFFIX)
    });
    let subnet_name = name_or_default(azure.compute_subnet.as_deref(), || {
        infra_name(infra_id, WORKER_SUBNET_SUFFIX)
    });

    let cloud_config = AzureCloudConfig {
        cloud_name: azure.cloud_name,
        resource_group_name,
        group_location: azure.region.clone(),
        resource_prefix: infra_id.to_string(),
        subscription_id: session.credentials.subscription_id.clone(),
        tenant_id: session.credentials.tenant_id.clone(),
        aad_client_id: session.credentials.client_id.clone(),
        aad_client_secret: session.credentials.client_secret.clone(),
        network_resource_group_name,
        network_security_group_name: infra_name(infra_id, NSG_SUFFIX),
        virtual_network_name,
        subnet_name,
        resource_manager_endpoint: azure.arm_endpoint.clone().unwrap_or_default(),
        aro: cfg!(feature = "aro"),
    }
    .to_json()
    .map_err(|e| Error::serialization_with_context(CREATE_CONTEXT, e))?;

    let mut data = BTreeMap::from([(CONFIG_KEY.to_string(), cloud_config)]);

    if session.environment.name == AzureCloudName::AzureStackCloud.as_str() {
        let endpoints = serde_json::to_string(&session.environment).map_err(|e| {
            Error::serialization_with_context("could not serialize Azure Stack endpoints", e)
        })?;
        data.insert(ENDPOINTS_KEY.to_string(), endpoints);
    }

    Ok(ProviderConfigData::Emit(data))
}
