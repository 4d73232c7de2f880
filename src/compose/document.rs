//! HTML document composition.
//!
//! # Responsibilities
//! - Turn a `RenderOutcome` into the response shape the dispatcher writes
//! - Emit the document skeleton the client bundle hydrates against
//! - Splice manifest styles into `<head>` and scripts at the end of `<body>`
//!
//! # Design Decisions
//! - Pure function of (outcome, bundle, settings): no clock, no randomness
//! - Manifest order is preserved for both styles and scripts
//! - Redirects are never composed

use std::fmt;

use axum::http::StatusCode;

use crate::assets::AssetBundle;
use crate::render::escape::escape_into;
use crate::render::{Head, LinkTag, RenderOutcome};

/// Settings for the document skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSettings {
    /// Value of `<html lang>`.
    pub lang: String,
    /// Id of the container the rendered markup is placed in.
    pub root_id: String,
    /// Prefix for relative asset paths. Always ends in `/`.
    pub public_path: String,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            root_id: "root".to_string(),
            public_path: "/".to_string(),
        }
    }
}

/// A complete HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument(String);

impl HtmlDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for HtmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the composer produced for an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composition {
    /// Redirects are written by the dispatcher directly.
    Skip,
    /// Bare status, empty body.
    Status(StatusCode),
    Document(HtmlDocument),
}

/// Assembles documents around rendered markup.
#[derive(Debug, Clone)]
pub struct Composer {
    /// Stylesheet hrefs, already resolved against the public path.
    styles: Vec<String>,
    /// Script srcs, already resolved against the public path.
    scripts: Vec<String>,
    settings: DocumentSettings,
}

impl Composer {
    pub fn new(bundle: &AssetBundle, settings: DocumentSettings) -> Self {
        let resolve = |path: &String| asset_url(&settings.public_path, path);
        Self {
            styles: bundle.styles.iter().map(resolve).collect(),
            scripts: bundle.scripts.iter().map(resolve).collect(),
            settings,
        }
    }

    pub fn compose(&self, outcome: &RenderOutcome) -> Composition {
        match outcome {
            RenderOutcome::Redirect(_) => Composition::Skip,
            RenderOutcome::Status(status) => Composition::Status(*status),
            RenderOutcome::Markup { markup, head } => {
                Composition::Document(self.compose_document(head, markup))
            }
        }
    }

    /// Build the full document for rendered markup.
    pub fn compose_document(&self, head: &Head, markup: &str) -> HtmlDocument {
        let mut out = String::with_capacity(markup.len() + 512);

        out.push_str("<!DOCTYPE html><html lang=\"");
        escape_into(&mut out, &self.settings.lang);
        out.push_str("\"><head><meta charset=\"utf-8\">");
        head.render_into(&mut out);
        for href in &self.styles {
            LinkTag::stylesheet(href.as_str()).render_into(&mut out);
        }
        out.push_str("</head><body><div id=\"");
        escape_into(&mut out, &self.settings.root_id);
        out.push_str("\">");
        out.push_str(markup);
        out.push_str("</div>");
        for src in &self.scripts {
            out.push_str("<script src=\"");
            escape_into(&mut out, src);
            out.push_str("\"></script>");
        }
        out.push_str("</body></html>");

        HtmlDocument(out)
    }
}

/// Resolve a manifest path against the public path. Absolute paths and URLs pass through.
pub fn asset_url(public_path: &str, path: &str) -> String {
    if path.starts_with('/') || path.contains("://") {
        return path.to_string();
    }
    let mut url = String::with_capacity(public_path.len() + path.len());
    url.push_str(public_path);
    if !url.ends_with('/') {
        url.push('/');
    }
    url.push_str(path);
    url
}
