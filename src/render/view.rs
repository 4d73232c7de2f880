//! View tree definitions.
//!
//! A view is a closed set of variants composed by nesting. Besides producing
//! markup, a view may declare head metadata (`View::Head`) or a routing
//! directive (`View::Redirect`, `View::Status`). Components are plain
//! functions of the route parameters, evaluated lazily during the render pass.

use axum::http::StatusCode;
use thiserror::Error;

use crate::render::head::HeadDecl;
use crate::routing::Params;

/// A component: builds a subtree from the route parameters, or fails.
pub type ViewFn = fn(&Params) -> Result<View, ViewError>;

/// Error raised by a component while building its subtree.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ViewError(String);

impl ViewError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Redirect directive declared by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
    pub status: StatusCode,
}

impl Redirect {
    /// Redirect with the default status, 307 Temporary Redirect.
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            to: target.into(),
            status: StatusCode::TEMPORARY_REDIRECT,
        }
    }

    pub fn with_status(target: impl Into<String>, status: StatusCode) -> Self {
        Self {
            to: target.into(),
            status,
        }
    }
}

/// An HTML element with ordered attributes.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<View>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<View>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, V>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<View>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Elements that never have content or a closing tag.
    pub fn is_void(&self) -> bool {
        matches!(
            self.tag,
            "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
                | "source" | "track" | "wbr"
        )
    }
}

/// A node in the view tree.
#[derive(Debug, Clone)]
pub enum View {
    /// Escaped text.
    Text(String),
    /// Trusted markup, emitted verbatim.
    Raw(String),
    Element(Element),
    Fragment(Vec<View>),
    /// Lazily evaluated component.
    Component(ViewFn),
    /// Head metadata contribution; renders nothing.
    Head(HeadDecl),
    /// Replace the response with a redirect.
    Redirect(Redirect),
    /// Replace the response with a bare status code.
    Status(StatusCode),
}

impl View {
    pub fn text(text: impl Into<String>) -> Self {
        View::Text(text.into())
    }

    pub fn raw(markup: impl Into<String>) -> Self {
        View::Raw(markup.into())
    }

    pub fn fragment<I, V>(children: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<View>,
    {
        View::Fragment(children.into_iter().map(Into::into).collect())
    }

    pub fn empty() -> Self {
        View::Fragment(Vec::new())
    }
}

impl From<Element> for View {
    fn from(element: Element) -> Self {
        View::Element(element)
    }
}

impl From<HeadDecl> for View {
    fn from(decl: HeadDecl) -> Self {
        View::Head(decl)
    }
}

impl From<Redirect> for View {
    fn from(redirect: Redirect) -> Self {
        View::Redirect(redirect)
    }
}

impl From<&str> for View {
    fn from(text: &str) -> Self {
        View::text(text)
    }
}

impl From<String> for View {
    fn from(text: String) -> Self {
        View::Text(text)
    }
}

/// Shorthand for `Element::new`.
pub fn el(tag: &'static str) -> Element {
    Element::new(tag)
}
