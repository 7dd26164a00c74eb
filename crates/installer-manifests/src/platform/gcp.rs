//! GCP cloud provider config

use minijinja::context;

use installer_common::Result;

use crate::template::ConfigRenderer;

const TEMPLATE: &str = r#"[global]
project-id      = {{ project_id }}
regional        = true
multizone       = true
node-tags       = {{ infra_id }}-master
node-tags       = {{ infra_id }}-worker
node-instance-prefix = {{ infra_id }}
external-instance-groups-prefix = {{ infra_id }}-master
subnetwork-name = {{ subnet }}
"#;

/// Render the GCE cloud provider config
pub fn cloud_provider_config(infra_id: &str, project_id: &str, subnet: &str) -> Result<String> {
    ConfigRenderer::new().render(
        "GCP",
        TEMPLATE,
        context! {
            infra_id => infra_id,
            project_id => project_id,
            subnet => subnet,
        },
    )
}
