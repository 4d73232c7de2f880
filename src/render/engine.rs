//! The render pass.
//!
//! # Responsibilities
//! - Look up the view for a matched route
//! - Wrap it in the application layout
//! - Walk the tree depth-first, producing markup
//! - Fold head declarations into a `HeadAccumulator`
//! - Stop at the first routing directive and report it instead of markup
//!
//! # Design Decisions
//! - Rendering is synchronous and deterministic
//! - Side channels are explicit state on the pass, not globals
//! - Any component error fails the whole pass; no partial markup escapes

use std::collections::HashMap;

use axum::http::StatusCode;
use thiserror::Error;

use crate::render::escape::{escape_into, write_attrs};
use crate::render::head::{Head, HeadAccumulator};
use crate::render::view::{Redirect, View, ViewError, ViewFn};
use crate::routing::{MatchResult, Params, ViewId};

/// Maximum nesting depth of a view tree.
pub const MAX_DEPTH: usize = 256;

/// Wraps the page view in application chrome.
pub type LayoutFn = fn(View) -> View;

/// Errors that abort a render pass.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The route points at a view that was never registered.
    #[error("unknown view '{0}'")]
    UnknownView(ViewId),

    /// A component failed while rendering.
    #[error("view '{view}' failed: {source}")]
    ViewFailed {
        view: ViewId,
        #[source]
        source: ViewError,
    },

    /// A redirect directive carried a non-3xx status.
    #[error("redirect to '{to}' has non-redirect status {status}")]
    InvalidRedirect { to: String, status: StatusCode },

    /// The view tree nests deeper than `MAX_DEPTH`.
    #[error("view tree exceeds maximum depth of {0}")]
    TooDeep(usize),
}

/// Result of one successful render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Normal page: markup for the root container and resolved head metadata.
    Markup { markup: String, head: Head },
    /// The view asked for a redirect.
    Redirect(Redirect),
    /// The view asked for a bare status code without a body.
    Status(StatusCode),
}

impl RenderOutcome {
    /// True if a routing directive replaced the markup.
    pub fn is_directive(&self) -> bool {
        !matches!(self, RenderOutcome::Markup { .. })
    }
}

/// Views addressable by route.
#[derive(Debug, Default, Clone)]
pub struct ViewRegistry {
    views: HashMap<ViewId, ViewFn>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, id: impl Into<ViewId>, view: ViewFn) -> Self {
        self.views.insert(id.into(), view);
        self
    }

    pub fn get(&self, id: &ViewId) -> Option<ViewFn> {
        self.views.get(id).copied()
    }

    pub fn contains(&self, id: &ViewId) -> bool {
        self.views.contains_key(id)
    }
}

/// Renders matched routes to `RenderOutcome`s.
#[derive(Debug, Clone)]
pub struct RenderEngine {
    views: ViewRegistry,
    layout: Option<LayoutFn>,
}

impl RenderEngine {
    pub fn new(views: ViewRegistry) -> Self {
        Self {
            views,
            layout: None,
        }
    }

    pub fn with_layout(mut self, layout: LayoutFn) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    /// Render the view for a matched route.
    pub fn render(&self, matched: &MatchResult) -> Result<RenderOutcome, RenderError> {
        let page = self
            .views
            .get(&matched.view)
            .ok_or_else(|| RenderError::UnknownView(matched.view.clone()))?;

        let root = match self.layout {
            Some(layout) => layout(View::Component(page)),
            None => View::Component(page),
        };

        let mut pass = RenderPass::new(&matched.view, &matched.params);
        pass.render(&root, 0)?;
        Ok(pass.finish())
    }
}

/// State of a single render pass.
struct RenderPass<'a> {
    view: &'a ViewId,
    params: &'a Params,
    markup: String,
    head: HeadAccumulator,
    directive: Option<RenderOutcome>,
}

impl<'a> RenderPass<'a> {
    fn new(view: &'a ViewId, params: &'a Params) -> Self {
        Self {
            view,
            params,
            markup: String::new(),
            head: HeadAccumulator::new(),
            directive: None,
        }
    }

    fn render(&mut self, node: &View, depth: usize) -> Result<(), RenderError> {
        if self.directive.is_some() {
            return Ok(());
        }
        if depth > MAX_DEPTH {
            return Err(RenderError::TooDeep(MAX_DEPTH));
        }

        match node {
            View::Text(text) => escape_into(&mut self.markup, text),
            View::Raw(markup) => self.markup.push_str(markup),
            View::Element(element) => {
                self.markup.push('<');
                self.markup.push_str(element.tag);
                write_attrs(&mut self.markup, &element.attrs);
                self.markup.push('>');
                if !element.is_void() {
                    for child in &element.children {
                        self.render(child, depth + 1)?;
                    }
                    self.markup.push_str("</");
                    self.markup.push_str(element.tag);
                    self.markup.push('>');
                }
            }
            View::Fragment(children) => {
                for child in children {
                    self.render(child, depth + 1)?;
                }
            }
            View::Component(component) => {
                let subtree = component(self.params).map_err(|source| RenderError::ViewFailed {
                    view: self.view.clone(),
                    source,
                })?;
                self.render(&subtree, depth + 1)?;
            }
            View::Head(decl) => self.head.apply(decl),
            View::Redirect(redirect) => {
                if !redirect.status.is_redirection() {
                    return Err(RenderError::InvalidRedirect {
                        to: redirect.to.clone(),
                        status: redirect.status,
                    });
                }
                tracing::debug!(view = %self.view, to = %redirect.to, status = %redirect.status, "View declared redirect");
                self.directive = Some(RenderOutcome::Redirect(redirect.clone()));
            }
            View::Status(status) => {
                tracing::debug!(view = %self.view, status = %status, "View declared status");
                self.directive = Some(RenderOutcome::Status(*status));
            }
        }
        Ok(())
    }

    fn finish(self) -> RenderOutcome {
        match self.directive {
            Some(directive) => directive,
            None => RenderOutcome::Markup {
                markup: self.markup,
                head: self.head.finish(),
            },
        }
    }
}
