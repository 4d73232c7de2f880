//! Static asset bookkeeping.
//!
//! # Data Flow
//! ```text
//! manifest.json (written by the bundler)
//!     → manifest.rs (parse once at startup)
//!     → AssetBundle for the configured bundle name
//!     → handed to the composer, read-only for the process lifetime
//! ```
//!
//! Serving the files themselves is delegated to `tower_http::services::ServeDir`.

pub mod manifest;

pub use manifest::{AssetBundle, AssetManifest, ManifestError};
