//! Integration tests for the cloud provider config asset
//!
//! These drive the asset the way the asset graph does: resolved parents in,
//! files out. Platform lookups are replaced by fixed fakes.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use installer_common::asset::{Asset, File, FileFetcher, Parents, WritableAsset};
use installer_common::install_config::{
    AwsPlatform, AzureCloudName, AzurePlatform, BareMetalPlatform, InstallConfigSpec,
    LibvirtPlatform, NonePlatform, OvirtPlatform, Platform,
};
use installer_common::session::{
    AzureCredentials, AzureEnvironment, AzureSession, AzureSessionSource, IbmCloudAccountSource,
};
use installer_common::{ClusterId, Error, InstallConfig, PlatformClients, Result};
use installer_manifests::{CloudProviderConfig, GenerationState};

const INFRA_ID: &str = "abcde";
const STACK_ARM_ENDPOINT: &str = "https://management.local.azurestack.external";

/// Azure session source returning a fixed session for the requested cloud
#[derive(Default)]
struct FakeAzure {
    calls: AtomicUsize,
}

#[async_trait]
impl AzureSessionSource for FakeAzure {
    async fn session(&self, platform: &AzurePlatform) -> Result<AzureSession> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(AzureSession {
            credentials: AzureCredentials {
                subscription_id: "00000000-0000-0000-0000-000000000001".to_string(),
                tenant_id: "00000000-0000-0000-0000-000000000002".to_string(),
                client_id: "client".to_string(),
                client_secret: "secret".to_string(),
            },
            environment: AzureEnvironment::for_cloud(
                platform.cloud_name,
                platform.arm_endpoint.as_deref(),
            )?,
        })
    }
}

/// IBM Cloud account source that always fails
struct UnreachableIbmCloud;

#[async_trait]
impl IbmCloudAccountSource for UnreachableIbmCloud {
    async fn account_id(&self) -> Result<String> {
        Err(Error::upstream_for(
            "ibmcloud",
            "IAM token request failed",
            "connection refused",
        ))
    }
}

/// Fetcher that has every file, to show loading never picks one up
struct EverythingFetcher;

impl FileFetcher for EverythingFetcher {
    fn fetch_by_name(&self, name: &str) -> Result<Option<File>> {
        Ok(Some(File::new(name, "apiVersion: v1\nkind: ConfigMap\n")))
    }
}

fn clients(azure: Arc<FakeAzure>) -> PlatformClients {
    PlatformClients {
        azure,
        ibmcloud: Arc::new(UnreachableIbmCloud),
    }
}

fn parents(platform: Option<Platform>, trust_bundle: &str) -> Parents {
    parents_with(platform, trust_bundle, Arc::new(FakeAzure::default()))
}

fn parents_with(platform: Option<Platform>, trust_bundle: &str, azure: Arc<FakeAzure>) -> Parents {
    let spec = InstallConfigSpec {
        additional_trust_bundle: Some(trust_bundle.to_string()),
        platform,
        ..Default::default()
    };
    Parents::new()
        .with(InstallConfig::new(spec, clients(azure)))
        .with(ClusterId::new(INFRA_ID).expect("valid infra id"))
}

fn aws(region: &str) -> Option<Platform> {
    Some(Platform::Aws(AwsPlatform {
        region: region.to_string(),
        ..Default::default()
    }))
}

fn azure(cloud_name: AzureCloudName) -> AzurePlatform {
    AzurePlatform {
        region: "eastus".to_string(),
        cloud_name,
        arm_endpoint: (cloud_name == AzureCloudName::AzureStackCloud)
            .then(|| STACK_ARM_ENDPOINT.to_string()),
        ..Default::default()
    }
}

async fn generate(parents: &Parents) -> CloudProviderConfig {
    let mut asset = CloudProviderConfig::new();
    asset
        .generate(parents)
        .await
        .expect("generation should succeed");
    asset
}

fn data(asset: &CloudProviderConfig) -> BTreeMap<String, String> {
    asset
        .config_map()
        .and_then(|cm| cm.data.clone())
        .expect("config map should carry data")
}

// =============================================================================
// Story: platforms without an in-cluster cloud provider
// =============================================================================

#[tokio::test]
async fn local_platforms_write_nothing() {
    for platform in [
        Platform::Libvirt(LibvirtPlatform::default()),
        Platform::None(NonePlatform::default()),
        Platform::BareMetal(BareMetalPlatform::default()),
        Platform::Ovirt(OvirtPlatform::default()),
    ] {
        let name = platform.name();
        let asset = generate(&parents(Some(platform), "BUNDLE")).await;
        assert!(asset.files().is_empty(), "{} should write no files", name);
        assert_eq!(asset.state(), GenerationState::Skipped);
    }
}

// =============================================================================
// Story: AWS only needs the config map in C2S regions with a trust bundle
// =============================================================================

#[tokio::test]
async fn aws_without_trust_bundle_skips_in_any_region() {
    for region in ["us-iso-east-1", "us-east-1"] {
        let asset = generate(&parents(aws(region), "")).await;
        assert!(asset.files().is_empty());
    }
}

#[tokio::test]
async fn aws_c2s_region_with_trust_bundle_writes_only_the_bundle() {
    let asset = generate(&parents(aws("us-isob-east-1"), "BUNDLE")).await;
    assert_eq!(asset.files().len(), 1);
    assert_eq!(
        data(&asset),
        BTreeMap::from([("ca-bundle.pem".to_string(), "BUNDLE".to_string())])
    );
}

#[tokio::test]
async fn aws_commercial_region_with_trust_bundle_skips() {
    let asset = generate(&parents(aws("us-east-1"), "BUNDLE")).await;
    assert!(asset.files().is_empty());
}

// =============================================================================
// Story: Azure derives resource names from the infrastructure ID
// =============================================================================

#[tokio::test]
async fn azure_defaults_are_named_after_the_infra_id() {
    let fake = Arc::new(FakeAzure::default());
    let asset = generate(&parents_with(
        Some(Platform::Azure(azure(AzureCloudName::AzurePublicCloud))),
        "",
        fake.clone(),
    ))
    .await;
    assert_eq!(fake.calls.load(Ordering::SeqCst), 1);

    let data = data(&asset);
    assert!(!data.contains_key("endpoints"));
    let config: serde_json::Value =
        serde_json::from_str(&data["config"]).expect("azure config should be JSON");
    assert_eq!(config["securityGroupName"], "abcde-nsg");
    assert_eq!(config["vnetName"], "abcde-vnet");
    assert_eq!(config["subnetName"], "abcde-worker-subnet");
    assert_eq!(config["resourceGroup"], "abcde-rg");
    assert_eq!(config["subscriptionId"], "00000000-0000-0000-0000-000000000001");
}

#[tokio::test]
async fn azure_overrides_win_when_set() {
    let platform = AzurePlatform {
        network_resource_group_name: Some("net-rg".to_string()),
        virtual_network: Some("vnet-1".to_string()),
        compute_subnet: Some(String::new()),
        ..azure(AzureCloudName::AzurePublicCloud)
    };
    let asset = generate(&parents(Some(Platform::Azure(platform)), "")).await;
    let config: serde_json::Value =
        serde_json::from_str(&data(&asset)["config"]).expect("azure config should be JSON");
    assert_eq!(config["vnetResourceGroup"], "net-rg");
    assert_eq!(config["vnetName"], "vnet-1");
    assert_eq!(config["subnetName"], "abcde-worker-subnet");
}

#[tokio::test]
async fn azure_stack_writes_the_endpoint_table() {
    let asset = generate(&parents(
        Some(Platform::Azure(azure(AzureCloudName::AzureStackCloud))),
        "",
    ))
    .await;
    let data = data(&asset);
    let endpoints: AzureEnvironment =
        serde_json::from_str(&data["endpoints"]).expect("endpoints should be JSON");
    assert_eq!(endpoints.resource_manager_endpoint, STACK_ARM_ENDPOINT);
}

// =============================================================================
// Story: failures abort the pass without output
// =============================================================================

#[tokio::test]
async fn unset_platform_is_rejected() {
    let mut asset = CloudProviderConfig::new();
    let err = asset
        .generate(&parents(None, ""))
        .await
        .expect_err("unset platform should fail");
    assert!(matches!(err, Error::UnsupportedPlatform { .. }));
    assert!(!err.is_retryable());
    assert!(asset.files().is_empty());
    assert_eq!(asset.state(), GenerationState::Failed);
}

#[tokio::test]
async fn ibmcloud_lookup_failure_carries_context() {
    let mut asset = CloudProviderConfig::new();
    let err = asset
        .generate(&parents(Some(Platform::IbmCloud(Default::default())), ""))
        .await
        .expect_err("account lookup should fail");
    assert_eq!(
        err.to_string(),
        "could not get IBM Cloud account ID: IAM token request failed: connection refused"
    );
    assert!(asset.files().is_empty());
}

// =============================================================================
// Story: output is reproducible and never loaded from disk
// =============================================================================

#[tokio::test]
async fn generation_is_idempotent() {
    let parents = parents(
        Some(Platform::Azure(azure(AzureCloudName::AzureStackCloud))),
        "",
    );
    let first = generate(&parents).await;
    let second = generate(&parents).await;
    assert_eq!(first.files()[0].data, second.files()[0].data);

    let mut again = first.clone();
    again.generate(&parents).await.expect("regeneration should succeed");
    assert_eq!(again.files(), first.files());
}

#[tokio::test]
async fn load_never_finds_the_config() {
    let mut fresh = CloudProviderConfig::new();
    assert!(!fresh.load(&EverythingFetcher).expect("load should not fail"));
    assert!(fresh.files().is_empty());
    assert_eq!(fresh.state(), GenerationState::NotGenerated);

    let mut generated = generate(&parents(aws("us-iso-west-1"), "BUNDLE")).await;
    let before: Vec<File> = generated.files().into_iter().cloned().collect();
    assert!(!generated.load(&EverythingFetcher).expect("load should not fail"));
    let after: Vec<File> = generated.files().into_iter().cloned().collect();
    assert_eq!(before, after);
}
