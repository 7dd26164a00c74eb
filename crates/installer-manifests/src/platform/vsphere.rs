//! vSphere cloud provider config

use minijinja::context;

use installer_common::install_config::VSpherePlatform;
use installer_common::Result;

use crate::constants::CREDENTIALS_SECRET_NAMESPACE;
use crate::template::ConfigRenderer;

/// Secret holding vCenter credentials for the cloud provider
pub const VSPHERE_CREDENTIALS_SECRET: &str = "vsphere-creds";

const TEMPLATE: &str = r#"[Global]
secret-name = "{{ secret_name }}"
secret-namespace = "{{ secret_namespace }}"
insecure-flag = "1"

[Workspace]
server = "{{ server }}"
datacenter = "{{ datacenter }}"
default-datastore = "{{ datastore }}"
folder = "{{ folder }}"

[VirtualCenter "{{ server }}"]
datacenters = "{{ datacenter }}"
"#;

/// Default VM folder of a cluster: `/{datacenter}/vm/{infra_id}`
pub fn default_folder(datacenter: &str, infra_id: &str) -> String {
    format!("/{}/vm/{}", datacenter, infra_id)
}

/// Render the vSphere cloud provider config for VMs placed in `folder`
pub fn cloud_provider_config(folder: &str, platform: &VSpherePlatform) -> Result<String> {
    ConfigRenderer::new().render(
        "vSphere",
        TEMPLATE,
        context! {
            secret_name => VSPHERE_CREDENTIALS_SECRET,
            secret_namespace => CREDENTIALS_SECRET_NAMESPACE,
            server => &platform.v_center,
            datacenter => &platform.datacenter,
            datastore => &platform.default_datastore,
            folder => folder,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_folder_is_under_datacenter() {
        assert_eq!(default_folder("dc1", "abcde"), "/dc1/vm/abcde");
    }

    #[test]
    fn renders_workspace_and_virtual_center() {
        let platform = VSpherePlatform {
            v_center: "vcenter.example.com".to_string(),
            datacenter: "dc1".to_string(),
            default_datastore: "ds1".to_string(),
            ..Default::default()
        };
        let config =
            cloud_provider_config("/dc1/vm/abcde", &platform).expect("config should render");
        assert_eq!(
            config,
            r#"[Global]
secret-name = "vsphere-creds"
secret-namespace = "kube-system"
insecure-flag = "1"

[Workspace]
server = "vcenter.example.com"
datacenter = "dc1"
default-datastore = "ds1"
folder = "/dc1/vm/abcde"

[VirtualCenter "vcenter.example.com"]
datacenters = "dc1"
"#
        );
    }
}
