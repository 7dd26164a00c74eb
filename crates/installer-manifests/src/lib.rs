//! Manifest generators for the installer
//!
//! Each generator is an asset in the installer's asset graph. It reads the
//! resolved install configuration and cluster identifiers and produces
//! Kubernetes manifests under `manifests/`.

#![deny(missing_docs)]

pub mod cloud_provider_config;
pub mod constants;
pub mod platform;
mod template;

pub use cloud_provider_config::{CloudProviderConfig, GenerationState};
pub use platform::{derive_data, ProviderConfigData};
