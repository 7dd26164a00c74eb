//! Asset graph interfaces
//!
//! Installer outputs are produced by a graph of assets. The graph engine
//! decides evaluation order, generates each asset's dependencies first and
//! hands their resolved values to [`Asset::generate`] through [`Parents`].
//! Assets that end up on disk implement [`WritableAsset`].

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{Error, Result};

/// Identifies an asset node in the graph
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// The user-supplied install configuration
    InstallConfig,
    /// The cluster's identifiers
    ClusterId,
    /// Platform credential validation
    PlatformCredsCheck,
    /// The cloud-provider-config manifest
    CloudProviderConfig,
}

/// A node in the asset graph
#[async_trait]
pub trait Asset: Send + Sync {
    /// Human friendly name of the asset
    fn name(&self) -> &'static str;

    /// Assets that must be generated before this one
    fn dependencies(&self) -> Vec<AssetKind>;

    /// Generate the asset from its resolved dependencies
    async fn generate(&mut self, parents: &Parents) -> Result<()>;
}

/// An asset that is written to disk
pub trait WritableAsset: Asset {
    /// Files produced by the last successful generation
    fn files(&self) -> Vec<&File>;

    /// Load the asset from previously written files.
    ///
    /// Returns `Ok(false)` when nothing was found and the asset must be
    /// generated.
    fn load(&mut self, fetcher: &dyn FileFetcher) -> Result<bool>;
}

/// A file produced by an asset, relative to the asset directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File {
    /// Path relative to the asset directory
    pub filename: PathBuf,
    /// File contents
    pub data: Vec<u8>,
}

impl File {
    /// Create a new file
    pub fn new(filename: impl Into<PathBuf>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
        }
    }

    /// Write the file below `dir`, creating parent directories
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.filename);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        std::fs::write(&path, &self.data).map_err(|e| Error::io(&path, e))?;
        Ok(path)
    }
}

/// Source of previously written files
pub trait FileFetcher {
    /// Fetch a file by its path relative to the asset directory
    fn fetch_by_name(&self, name: &str) -> Result<Option<File>>;
}

/// Fetches files from an asset directory on disk
#[derive(Clone, Debug)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    /// Create a fetcher rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileFetcher for DirFetcher {
    fn fetch_by_name(&self, name: &str) -> Result<Option<File>> {
        let path = self.root.join(name);
        match std::fs::read(&path) {
            Ok(data) => Ok(Some(File::new(name, data))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io(path, e)),
        }
    }
}

/// Resolved dependency values handed to [`Asset::generate`]
///
/// Values are keyed by type; an asset asks for the parents it declared.
#[derive(Default)]
pub struct Parents {
    values: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Parents {
    /// Create an empty set of parents
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resolved asset, replacing any previous value of the same type
    pub fn insert<A: Asset + 'static>(&mut self, asset: A) {
        self.values.insert(TypeId::of::<A>(), Box::new(asset));
    }

    /// Add a resolved asset, builder style
    pub fn with<A: Asset + 'static>(mut self, asset: A) -> Self {
        self.insert(asset);
        self
    }

    /// Get a resolved asset by type
    pub fn get<A: Asset + 'static>(&self) -> Result<&A> {
        self.values
            .get(&TypeId::of::<A>())
            .and_then(|v| v.downcast_ref::<A>())
            .ok_or_else(|| Error::missing_dependency(std::any::type_name::<A>()))
    }

    /// Returns true if a value of type `A` was supplied
    pub fn contains<A: Asset + 'static>(&self) -> bool {
        self.values.contains_key(&TypeId::of::<A>())
    }
}

impl std::fmt::Debug for Parents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parents")
            .field("count", &self.values.len())
            .finish()
    }
}
