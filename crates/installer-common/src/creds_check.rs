//! Platform credentials check
//!
//! Validates that credentials for the selected platform are usable before
//! any asset that needs them runs. Dependents list this asset only for its
//! side effect and never read its value.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::asset::{Asset, AssetKind, Parents};
use crate::install_config::{InstallConfig, Platform};
use crate::{Error, Result};

/// The platform credentials check asset
#[derive(Clone, Debug, Default)]
pub struct PlatformCredsCheck;

#[async_trait]
impl Asset for PlatformCredsCheck {
    fn name(&self) -> &'static str {
        "Platform Credentials Check"
    }

    fn dependencies(&self) -> Vec<AssetKind> {
        vec![AssetKind::InstallConfig]
    }

    async fn generate(&mut self, parents: &Parents) -> Result<()> {
        let install_config = parents.get::<InstallConfig>()?;
        match &install_config.config.platform {
            Some(Platform::Azure(azure)) => {
                install_config
                    .clients
                    .azure
                    .session(azure)
                    .await
                    .map_err(|e| Error::upstream_for("azure", "could not get azure session", e))?;
                info!(platform = "azure", "credentials validated");
            }
            Some(Platform::IbmCloud(_)) => {
                install_config
                    .clients
                    .ibmcloud
                    .account_id()
                    .await
                    .map_err(|e| {
                        Error::upstream_for("ibmcloud", "could not get IBM Cloud account ID", e)
                    })?;
                info!(platform = "ibmcloud", "credentials validated");
            }
            other => {
                debug!(
                    platform = other.as_ref().map(Platform::name).unwrap_or("unset"),
                    "no credentials to check"
                );
            }
        }
        Ok(())
    }
}
