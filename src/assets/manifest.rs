//! Build-time asset manifest.
//!
//! The bundler writes a JSON file mapping each bundle name to the files it
//! emitted, e.g.
//!
//! ```json
//! { "main": { "scripts": ["main-abc.js"], "styles": ["main-abc.css"] } }
//! ```
//!
//! The manifest is read once at startup and never reloaded.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading the manifest. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read asset manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse asset manifest: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("bundle '{0}' not found in asset manifest")]
    MissingBundle(String),
}

/// Files emitted for one bundle, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssetBundle {
    #[serde(default)]
    pub scripts: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
}

impl AssetBundle {
    pub fn new(scripts: Vec<String>, styles: Vec<String>) -> Self {
        Self { scripts, styles }
    }
}

/// Bundle name → emitted files.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AssetManifest {
    bundles: BTreeMap<String, AssetBundle>,
}

impl AssetManifest {
    /// Load the manifest from disk.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::from_json(&content)?;

        tracing::info!(
            path = %path.display(),
            bundles = manifest.bundles.len(),
            "Asset manifest loaded"
        );
        Ok(manifest)
    }

    pub fn from_json(content: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn insert(&mut self, name: impl Into<String>, bundle: AssetBundle) {
        self.bundles.insert(name.into(), bundle);
    }

    /// Look up a bundle by name.
    pub fn bundle(&self, name: &str) -> Result<&AssetBundle, ManifestError> {
        self.bundles
            .get(name)
            .ok_or_else(|| ManifestError::MissingBundle(name.to_string()))
    }

    pub fn bundle_names(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }
}
