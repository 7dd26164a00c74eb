//! Platform sessions and account lookups
//!
//! Some platforms need live credentials before their configuration can be
//! derived: Azure needs a session (credentials plus the cloud's endpoint
//! table) and IBM Cloud needs the account ID owning the API key. Both are
//! modelled as narrow capabilities so callers can be tested without live
//! cloud calls.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::install_config::{AzureCloudName, AzurePlatform};
use crate::{Error, Result};

/// Service principal credentials for Azure
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureCredentials {
    /// Subscription the cluster is created in
    pub subscription_id: String,
    /// Azure AD tenant
    pub tenant_id: String,
    /// Service principal application ID
    pub client_id: String,
    /// Service principal secret
    pub client_secret: String,
}

impl std::fmt::Debug for AzureCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureCredentials")
            .field("subscription_id", &self.subscription_id)
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

const AZURE_SUBSCRIPTION_ID: &str = "AZURE_SUBSCRIPTION_ID";
const AZURE_TENANT_ID: &str = "AZURE_TENANT_ID";
const AZURE_CLIENT_ID: &str = "AZURE_CLIENT_ID";
const AZURE_CLIENT_SECRET: &str = "AZURE_CLIENT_SECRET";

/// Service principal file written by earlier installer runs
const AZURE_PRINCIPAL_FILE: &str = ".azure/osServicePrincipal.json";

impl AzureCredentials {
    /// Load credentials through a variable lookup (e.g. the process environment)
    ///
    /// Returns `None` when any of the four variables is unset or empty.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Some(Self {
            subscription_id: get(AZURE_SUBSCRIPTION_ID)?,
            tenant_id: get(AZURE_TENANT_ID)?,
            client_id: get(AZURE_CLIENT_ID)?,
            client_secret: get(AZURE_CLIENT_SECRET)?,
        })
    }

    /// Load credentials from environment variables
    pub fn from_env() -> Option<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Parse a service principal file
    pub fn from_principal_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|e| {
            Error::validation(format!("invalid Azure service principal file: {}", e))
        })
    }
}

/// Endpoints of an Azure cloud environment
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AzureEnvironment {
    /// Environment name (e.g., "AzurePublicCloud")
    pub name: String,
    /// Legacy management portal
    #[serde(rename = "managementPortalURL")]
    pub management_portal_url: String,
    /// Classic service management API
    #[serde(rename = "serviceManagementEndpoint")]
    pub service_management_endpoint: String,
    /// Azure Resource Manager API
    #[serde(rename = "resourceManagerEndpoint")]
    pub resource_manager_endpoint: String,
    /// Azure AD login endpoint
    #[serde(rename = "activeDirectoryEndpoint")]
    pub active_directory_endpoint: String,
    /// Marketplace gallery
    #[serde(rename = "galleryEndpoint")]
    pub gallery_endpoint: String,
    /// Key Vault data plane
    #[serde(rename = "keyVaultEndpoint")]
    pub key_vault_endpoint: String,
    /// Azure AD Graph API
    #[serde(rename = "graphEndpoint")]
    pub graph_endpoint: String,
    /// DNS suffix of storage accounts
    #[serde(rename = "storageEndpointSuffix")]
    pub storage_endpoint_suffix: String,
    /// Audience of tokens for the resource manager
    #[serde(rename = "tokenAudience")]
    pub token_audience: String,
}

impl AzureEnvironment {
    #[allow(clippy::too_many_arguments)]
    fn well_known(
        name: &str,
        portal: &str,
        service_management: &str,
        resource_manager: &str,
        active_directory: &str,
        gallery: &str,
        key_vault: &str,
        graph: &str,
        storage_suffix: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            management_portal_url: portal.to_string(),
            service_management_endpoint: service_management.to_string(),
            resource_manager_endpoint: resource_manager.to_string(),
            active_directory_endpoint: active_directory.to_string(),
            gallery_endpoint: gallery.to_string(),
            key_vault_endpoint: key_vault.to_string(),
            graph_endpoint: graph.to_string(),
            storage_endpoint_suffix: storage_suffix.to_string(),
            token_audience: resource_manager.to_string(),
        }
    }

    /// Endpoint table for a cloud.
    ///
    /// Azure Stack Hub has no well-known endpoints; its table is built from
    /// the configured resource manager endpoint, which must be set.
    pub fn for_cloud(cloud: AzureCloudName, arm_endpoint: Option<&str>) -> Result<Self> {
        let env = match cloud {
            AzureCloudName::AzurePublicCloud => Self::well_known(
                cloud.as_str(),
                "https://manage.windowsazure.com/",
                "https://management.core.windows.net/",
                "https://management.azure.com/",
                "https://login.microsoftonline.com/",
                "https://gallery.azure.com/",
                "https://vault.azure.net/",
                "https://graph.windows.net/",
                "core.windows.net",
            ),
            AzureCloudName::AzureUsGovernmentCloud => Self::well_known(
                cloud.as_str(),
                "https://manage.windowsazure.us/",
                "https://management.core.usgovcloudapi.net/",
                "https://management.usgovcloudapi.net/",
                "https://login.microsoftonline.us/",
                "https://gallery.usgovcloudapi.net/",
                "https://vault.usgovcloudapi.net/",
                "https://graph.windows.net/",
                "core.usgovcloudapi.net",
            ),
            AzureCloudName::AzureChinaCloud => Self::well_known(
                cloud.as_str(),
                "https://manage.chinacloudapi.com/",
                "https://management.core.chinacloudapi.cn/",
                "https://management.chinacloudapi.cn/",
                "https://login.chinacloudapi.cn/",
                "https://gallery.chinacloudapi.cn/",
                "https://vault.azure.cn/",
                "https://graph.chinacloudapi.cn/",
                "core.chinacloudapi.cn",
            ),
            AzureCloudName::AzureGermanCloud => Self::well_known(
                cloud.as_str(),
                "http://portal.microsoftazure.de/",
                "https://management.core.cloudapi.de/",
                "https://management.microsoftazure.de/",
                "https://login.microsoftonline.de/",
                "https://gallery.cloudapi.de/",
                "https://vault.microsoftazure.de/",
                "https://graph.cloudapi.de/",
                "core.cloudapi.de",
            ),
            AzureCloudName::AzureStackCloud => {
                let arm = arm_endpoint.filter(|e| !e.is_empty()).ok_or_else(|| {
                    Error::validation_for_field(
                        "platform.azure.armEndpoint",
                        "armEndpoint is required for AzureStackCloud",
                    )
                })?;
                Self {
                    name: cloud.as_str().to_string(),
                    resource_manager_endpoint: arm.to_string(),
                    token_audience: arm.to_string(),
                    ..Default::default()
                }
            }
        };
        Ok(env)
    }
}

/// An authenticated Azure session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AzureSession {
    /// Service principal credentials
    pub credentials: AzureCredentials,
    /// Endpoints of the cloud the session talks to
    pub environment: AzureEnvironment,
}

/// Acquires Azure sessions
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AzureSessionSource: Send + Sync {
    /// Acquire a session for the configured cloud
    async fn session(&self, platform: &AzurePlatform) -> Result<AzureSession>;
}

/// Looks up the IBM Cloud account that owns the configured API key
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait IbmCloudAccountSource: Send + Sync {
    /// Return the account ID
    async fn account_id(&self) -> Result<String>;
}

/// Azure sessions from environment variables or the service principal file
#[derive(Clone, Debug, Default)]
pub struct EnvAzureSessionSource {
    principal_file: Option<PathBuf>,
}

impl EnvAzureSessionSource {
    /// Create a source that falls back to `~/.azure/osServicePrincipal.json`
    pub fn new() -> Self {
        Self {
            principal_file: dirs::home_dir().map(|home| home.join(AZURE_PRINCIPAL_FILE)),
        }
    }

    /// Create a source that falls back to the given service principal file
    pub fn with_principal_file(path: impl Into<PathBuf>) -> Self {
        Self {
            principal_file: Some(path.into()),
        }
    }

    fn credentials(&self) -> Result<AzureCredentials> {
        if let Some(creds) = AzureCredentials::from_env() {
            debug!("using Azure credentials from environment");
            return Ok(creds);
        }
        let path = self.principal_file.as_ref().ok_or_else(|| {
            Error::validation(format!(
                "{}, {}, {} and {} must be set",
                AZURE_SUBSCRIPTION_ID, AZURE_TENANT_ID, AZURE_CLIENT_ID, AZURE_CLIENT_SECRET
            ))
        })?;
        let data = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        debug!(path = %path.display(), "using Azure credentials from service principal file");
        AzureCredentials::from_principal_json(&data)
    }
}

#[async_trait]
impl AzureSessionSource for EnvAzureSessionSource {
    async fn session(&self, platform: &AzurePlatform) -> Result<AzureSession> {
        let credentials = self.credentials()?;
        let environment =
            AzureEnvironment::for_cloud(platform.cloud_name, platform.arm_endpoint.as_deref())?;
        Ok(AzureSession {
            credentials,
            environment,
        })
    }
}

const IBMCLOUD_ACCOUNT_ID: &str = "IBMCLOUD_ACCOUNT_ID";

/// IBM Cloud account ID from the environment
#[derive(Clone, Debug, Default)]
pub struct EnvIbmCloudAccountSource {
    vars: Option<HashMap<String, String>>,
}

impl EnvIbmCloudAccountSource {
    /// Read `IBMCLOUD_ACCOUNT_ID` from the process environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from a fixed set of variables instead of the process environment
    pub fn from_vars(vars: HashMap<String, String>) -> Self {
        Self { vars: Some(vars) }
    }
}

#[async_trait]
impl IbmCloudAccountSource for EnvIbmCloudAccountSource {
    async fn account_id(&self) -> Result<String> {
        let value = match &self.vars {
            Some(vars) => vars.get(IBMCLOUD_ACCOUNT_ID).cloned(),
            None => std::env::var(IBMCLOUD_ACCOUNT_ID).ok(),
        };
        value
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::validation(format!("{} is not set", IBMCLOUD_ACCOUNT_ID)))
    }
}

/// Lookup capabilities available to assets
#[derive(Clone)]
pub struct PlatformClients {
    /// Azure session acquisition
    pub azure: Arc<dyn AzureSessionSource>,
    /// IBM Cloud account lookup
    pub ibmcloud: Arc<dyn IbmCloudAccountSource>,
}

impl Default for PlatformClients {
    fn default() -> Self {
        Self {
            azure: Arc::new(EnvAzureSessionSource::new()),
            ibmcloud: Arc::new(EnvIbmCloudAccountSource::new()),
        }
    }
}

impl std::fmt::Debug for PlatformClients {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformClients").finish_non_exhaustive()
    }
}
