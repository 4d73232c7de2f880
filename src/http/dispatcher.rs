//! Per-request orchestration of the render pipeline.
//!
//! # Request States
//! ```text
//! Start → Resolving ─┬─ NotFound                       (terminal)
//!                    └─ Matched → Rendering ─┬─ Redirecting  (terminal)
//!                                            ├─ StatusOnly   (terminal)
//!                                            ├─ Failed       (terminal)
//!                                            └─ Composing → Responding (terminal)
//! ```
//!
//! # Design Decisions
//! - `dispatch` is synchronous and free of I/O; the HTTP layer writes the result
//! - Nothing is shared between requests except the immutable pipeline parts
//! - Render errors are logged here and never reach the client

use std::time::Instant;

use axum::http::StatusCode;

use crate::compose::{Composer, Composition, HtmlDocument};
use crate::observability::metrics;
use crate::render::{Redirect, RenderEngine, RenderOutcome};
use crate::routing::RouteTable;

/// Terminal state of one dispatched request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// No route matched the path.
    NotFound,
    /// A view declared a redirect; nothing was composed.
    Redirect(Redirect),
    /// A view declared a bare status code.
    Status(StatusCode),
    /// A full page.
    Document(HtmlDocument),
    /// Rendering failed.
    Failed,
}

impl Dispatch {
    /// Short label used for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Dispatch::NotFound => "not_found",
            Dispatch::Redirect(_) => "redirect",
            Dispatch::Status(_) => "status",
            Dispatch::Document(_) => "document",
            Dispatch::Failed => "failed",
        }
    }
}

/// Resolver, render engine and composer wired together.
#[derive(Debug)]
pub struct Dispatcher {
    routes: RouteTable,
    engine: RenderEngine,
    composer: Composer,
}

impl Dispatcher {
    pub fn new(routes: RouteTable, engine: RenderEngine, composer: Composer) -> Self {
        Self {
            routes,
            engine,
            composer,
        }
    }

    /// Run one request path through the pipeline.
    pub fn dispatch(&self, path: &str) -> Dispatch {
        let dispatch = self.run(path);
        metrics::record_request(dispatch.label());
        dispatch
    }

    fn run(&self, path: &str) -> Dispatch {
        let matched = match self.routes.resolve(path) {
            Ok(matched) => matched,
            Err(e) => {
                tracing::debug!(path = %path, error = %e, "No route matched");
                return Dispatch::NotFound;
            }
        };

        tracing::debug!(path = %path, view = %matched.view, params = ?matched.params, "Route matched");
        let start = Instant::now();

        let outcome = match self.engine.render(&matched) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(path = %path, view = %matched.view, error = %e, "Render failed");
                return Dispatch::Failed;
            }
        };

        let dispatch = match outcome {
            RenderOutcome::Redirect(redirect) => Dispatch::Redirect(redirect),
            outcome => match self.composer.compose(&outcome) {
                Composition::Document(document) => Dispatch::Document(document),
                Composition::Status(status) => Dispatch::Status(status),
                // Only produced for redirects, which never reach the composer
                Composition::Skip => Dispatch::Failed,
            },
        };

        metrics::record_render(start);
        tracing::debug!(
            path = %path,
            view = %matched.view,
            outcome = dispatch.label(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Request dispatched"
        );
        dispatch
    }
}
