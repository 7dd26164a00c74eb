//! Cluster identifiers
//!
//! Every cluster gets an infrastructure ID: a short, DNS-safe prefix that all
//! cloud resources created for the cluster are named after.

use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::info;

use crate::asset::{Asset, AssetKind, Parents};
use crate::install_config::InstallConfig;
use crate::{Error, Result};

/// Maximum length of an infrastructure ID
pub const MAX_INFRA_ID_LEN: usize = 27;

/// Length of the random suffix appended to the cluster name
const RANDOM_SUFFIX_LEN: usize = 5;

/// Base used when nothing DNS-safe is left of the cluster name
const FALLBACK_BASE: &str = "cluster";

/// The cluster identifier asset
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClusterId {
    /// Infrastructure ID used as the naming prefix of cloud resources
    pub infra_id: String,
}

impl ClusterId {
    /// Use an existing infrastructure ID
    pub fn new(infra_id: impl Into<String>) -> Result<Self> {
        let infra_id = infra_id.into();
        if infra_id.is_empty() {
            return Err(Error::validation_for_field(
                "infraID",
                "infrastructure ID must not be empty",
            ));
        }
        Ok(Self { infra_id })
    }
}

/// Derive an infrastructure ID from a cluster name.
///
/// The name is lowercased, characters outside `[a-z0-9-]` become `-`, the
/// result is truncated so the ID fits [`MAX_INFRA_ID_LEN`], leading and
/// trailing dashes are trimmed and a random suffix is appended.
pub fn generate_infra_id(cluster_name: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_SUFFIX_LEN)
        .map(|c| char::from(c).to_ascii_lowercase())
        .collect();
    infra_id_with_suffix(cluster_name, &suffix)
}

fn infra_id_with_suffix(cluster_name: &str, suffix: &str) -> String {
    let max_base = MAX_INFRA_ID_LEN - RANDOM_SUFFIX_LEN - 1;
    let base: String = cluster_name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .take(max_base)
        .collect();
    let base = base.trim_matches('-');
    let base = if base.is_empty() { FALLBACK_BASE } else { base };
    format!("{}-{}", base, suffix)
}

#[async_trait]
impl Asset for ClusterId {
    fn name(&self) -> &'static str {
        "Cluster ID"
    }

    fn dependencies(&self) -> Vec<AssetKind> {
        vec![AssetKind::InstallConfig]
    }

    async fn generate(&mut self, parents: &Parents) -> Result<()> {
        let install_config = parents.get::<InstallConfig>()?;
        self.infra_id = generate_infra_id(&install_config.config.metadata.name);
        info!(infra_id = %self.infra_id, "generated infrastructure ID");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install_config::InstallConfigSpec;

    #[test]
    fn short_names_are_kept() {
        assert_eq!(infra_id_with_suffix("prod", "x1y2z"), "prod-x1y2z");
    }

    #[test]
    fn invalid_characters_become_dashes() {
        assert_eq!(infra_id_with_suffix("My_Cluster.1", "abcde"), "my-cluster-1-abcde");
    }

    #[test]
    fn long_names_are_truncated_and_trimmed() {
        let id = infra_id_with_suffix("a-very-long-clusters-name", "abcde");
        assert!(id.len() <= MAX_INFRA_ID_LEN);
        assert_eq!(id, "a-very-long-clusters-abcde");
    }

    #[test]
    fn leading_dashes_are_trimmed() {
        assert_eq!(infra_id_with_suffix("_prod", "abcde"), "prod-abcde");
    }

    #[test]
    fn names_without_valid_characters_use_fallback() {
        assert_eq!(infra_id_with_suffix("___", "abcde"), "cluster-abcde");
        assert_eq!(infra_id_with_suffix("", "abcde"), "cluster-abcde");
    }

    #[test]
    fn generated_ids_have_random_lowercase_suffix() {
        let id = generate_infra_id("prod");
        assert!(id.starts_with("prod-"));
        let suffix = &id["prod-".len()..];
        assert_eq!(suffix.len(), RANDOM_SUFFIX_LEN);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn empty_infra_id_is_rejected() {
        assert!(ClusterId::new("").is_err());
        assert_eq!(
            ClusterId::new("abcde").expect("non-empty id").infra_id,
            "abcde"
        );
    }

    #[tokio::test]
    async fn generate_uses_cluster_name() {
        let mut spec = InstallConfigSpec::default();
        spec.metadata.name = "test".to_string();
        let parents = Parents::new().with(InstallConfig::new(spec, Default::default()));

        let mut cluster_id = ClusterId::default();
        cluster_id
            .generate(&parents)
            .await
            .expect("generation should succeed");
        assert!(cluster_id.infra_id.starts_with("test-"));
    }
}
