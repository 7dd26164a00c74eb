//! Error types for the installer
//!
//! Errors are structured with fields so a failed generation pass can be
//! localized from the message alone. Wrapped failures render as a message
//! chain (`"<step>: <cause>"`), which is what the user sees when a
//! provisioning run aborts.

use std::path::PathBuf;

use thiserror::Error;

/// Default context value when no specific context is available
pub const UNKNOWN_CONTEXT: &str = "unknown";

/// Main error type for installer operations
#[derive(Debug, Error)]
pub enum Error {
    /// The install configuration is malformed or inconsistent
    #[error("validation error: {message}")]
    Validation {
        /// Description of what's invalid
        message: String,
        /// The invalid field path (e.g., "platform.azure.region")
        field: Option<String>,
    },

    /// An external session, account lookup or delegated renderer failed
    #[error("{context}: {message}")]
    Upstream {
        /// Platform whose lookup failed (e.g., "azure", "ibmcloud")
        platform: String,
        /// Step that was being performed when the call failed
        context: String,
        /// Underlying cause
        message: String,
    },

    /// Structured object to string or bytes conversion failed
    #[error("{context}: {message}")]
    Serialization {
        /// Step that was being performed
        context: String,
        /// Description of what failed
        message: String,
        /// The resource kind being serialized (if known)
        kind: Option<String>,
    },

    /// The selected platform has no derivation rule
    #[error("invalid Platform{}", platform.as_deref().map(|p| format!(" {p:?}")).unwrap_or_default())]
    UnsupportedPlatform {
        /// Platform tag, `None` when no platform was selected at all
        platform: Option<String>,
    },

    /// The dependency graph did not supply a required parent value
    #[error("missing dependency: {asset}")]
    MissingDependency {
        /// Name of the missing asset
        asset: String,
    },

    /// Filesystem failure while reading inputs or writing files
    #[error("io error [{}]: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// The underlying io error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a validation error with the given message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a validation error for a specific field path
    pub fn validation_for_field(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create an upstream error without platform context
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream {
            platform: UNKNOWN_CONTEXT.to_string(),
            context: UNKNOWN_CONTEXT.to_string(),
            message: msg.into(),
        }
    }

    /// Wrap an upstream failure with the platform and the step being performed
    pub fn upstream_for(
        platform: impl Into<String>,
        context: impl Into<String>,
        cause: impl std::fmt::Display,
    ) -> Self {
        Self::Upstream {
            platform: platform.into(),
            context: context.into(),
            message: cause.to_string(),
        }
    }

    /// Create a serialization error with the given message
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization {
            context: "serialization error".to_string(),
            message: msg.into(),
            kind: None,
        }
    }

    /// Wrap a serialization failure with the step being performed
    pub fn serialization_with_context(
        context: impl Into<String>,
        cause: impl std::fmt::Display,
    ) -> Self {
        Self::Serialization {
            context: context.into(),
            message: cause.to_string(),
            kind: None,
        }
    }

    /// Wrap a serialization failure for a specific resource kind
    pub fn serialization_for_kind(
        kind: impl Into<String>,
        context: impl Into<String>,
        cause: impl std::fmt::Display,
    ) -> Self {
        Self::Serialization {
            context: context.into(),
            message: cause.to_string(),
            kind: Some(kind.into()),
        }
    }

    /// Create an unsupported platform error
    pub fn unsupported_platform(platform: Option<&str>) -> Self {
        Self::UnsupportedPlatform {
            platform: platform.map(str::to_string),
        }
    }

    /// Create a missing dependency error
    pub fn missing_dependency(asset: impl Into<String>) -> Self {
        Self::MissingDependency {
            asset: asset.into(),
        }
    }

    /// Create an io error for a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if this error is retryable
    ///
    /// Only failures of external calls may succeed on a later pass. Everything
    /// else needs a configuration or code fix.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Upstream { .. } => true,
            Error::Io { .. } => true,
            Error::Validation { .. } => false,
            Error::Serialization { .. } => false,
            Error::UnsupportedPlatform { .. } => false,
            Error::MissingDependency { .. } => false,
        }
    }

    /// Get the platform if this error is associated with one
    pub fn platform(&self) -> Option<&str> {
        match self {
            Error::Upstream { platform, .. } => Some(platform),
            Error::UnsupportedPlatform { platform } => platform.as_deref(),
            _ => None,
        }
    }

    /// Get the step context if this error has one
    pub fn context(&self) -> Option<&str> {
        match self {
            Error::Upstream { context, .. } => Some(context),
            Error::Serialization { context, .. } => Some(context),
            _ => None,
        }
    }
}
