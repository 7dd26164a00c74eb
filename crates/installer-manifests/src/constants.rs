//! Names of the cloud provider config object and its data keys

/// Namespace of the cloud provider config map
pub use installer_common::OPENSHIFT_CONFIG_NAMESPACE as CLOUD_PROVIDER_CONFIG_NAMESPACE;

/// Name of the cloud provider config map
pub const CLOUD_PROVIDER_CONFIG_NAME: &str = "cloud-provider-config";

/// File name of the manifest, relative to the manifests directory
pub const CLOUD_PROVIDER_CONFIG_FILENAME: &str = "cloud-provider-config.yaml";

/// Data key of the provider configuration payload
pub const CONFIG_KEY: &str = "config";

/// Data key of the PEM trust bundle
pub const CA_BUNDLE_KEY: &str = "ca-bundle.pem";

/// Data key of the serialized endpoint table for alternate clouds
pub const ENDPOINTS_KEY: &str = "endpoints";

/// Secret holding cloud credentials for in-cluster components
pub const CREDENTIALS_SECRET_NAMESPACE: &str = "kube-system";
