//! Response composition.
//!
//! # Data Flow
//! ```text
//! RenderOutcome
//!     → Redirect          → Composition::Skip (dispatcher writes Location)
//!     → Status            → Composition::Status
//!     → Markup + Head     → document.rs (doctype, head, styles, root, scripts)
//!                         → Composition::Document
//! ```

pub mod document;

pub use document::{asset_url, Composer, Composition, DocumentSettings, HtmlDocument};
