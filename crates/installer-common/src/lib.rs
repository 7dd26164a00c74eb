//! Common types for the installer: install configuration, asset graph
//! interfaces, platform sessions and errors

#![deny(missing_docs)]

pub mod asset;
pub mod cluster_id;
pub mod creds_check;
pub mod error;
pub mod install_config;
pub mod naming;
pub mod session;
pub mod telemetry;

pub use asset::{Asset, AssetKind, DirFetcher, File, FileFetcher, Parents, WritableAsset};
pub use cluster_id::ClusterId;
pub use creds_check::PlatformCredsCheck;
pub use error::Error;
pub use install_config::{InstallConfig, InstallConfigSpec, Platform};
pub use session::PlatformClients;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Directory, relative to the asset directory, that manifests are written to
pub const MANIFEST_DIR: &str = "manifests";

/// Namespace holding cluster-wide configuration objects
pub const OPENSHIFT_CONFIG_NAMESPACE: &str = "openshift-config";
