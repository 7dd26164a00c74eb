//! OpenStack cloud provider config

use minijinja::context;

use installer_common::install_config::{InstallConfigSpec, Platform};
use installer_common::{Error, Result};

use crate::constants::{CA_BUNDLE_KEY, CREDENTIALS_SECRET_NAMESPACE};
use crate::template::ConfigRenderer;

/// Secret holding the clouds.yaml entry for in-cluster components
pub const OPENSTACK_CREDENTIALS_SECRET: &str = "openstack-credentials";

/// Where the config map's CA bundle is mounted for the cloud provider
pub const CA_BUNDLE_MOUNT_PATH: &str =
    "/etc/kubernetes/static-pod-resources/configmaps/cloud-config";

const TEMPLATE: &str = r#"[Global]
secret-name = {{ secret_name }}
secret-namespace = {{ secret_namespace }}
{% if region %}
region = {{ region }}
{% endif %}
{% if ca_file %}
ca-file = {{ ca_file }}
{% endif %}
"#;

/// Render the cloud provider config and CA bundle for an OpenStack install.
///
/// Returns `(config, ca_bundle)`; the bundle is empty when no CA
/// certificate is configured.
pub fn cloud_provider_config(config: &InstallConfigSpec) -> Result<(String, String)> {
    let Some(Platform::OpenStack(openstack)) = &config.platform else {
        return Err(Error::validation("install config does not select OpenStack"));
    };
    if openstack.cloud.is_empty() {
        return Err(Error::validation_for_field(
            "platform.openstack.cloud",
            "cloud name is required",
        ));
    }

    let ca_bundle = openstack.ca_cert.clone().unwrap_or_default();
    let ca_file = if ca_bundle.is_empty() {
        String::new()
    } else {
        format!("{}/{}", CA_BUNDLE_MOUNT_PATH, CA_BUNDLE_KEY)
    };

    let rendered = ConfigRenderer::new().render(
        "OpenStack",
        TEMPLATE,
        context! {
            secret_name => OPENSTACK_CREDENTIALS_SECRET,
            secret_namespace => CREDENTIALS_SECRET_NAMESPACE,
            region => openstack.region.as_deref().unwrap_or_default(),
            ca_file => ca_file,
        },
    )?;
    Ok((rendered, ca_bundle))
}
