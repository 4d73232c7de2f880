//! Route lookup.
//!
//! # Responsibilities
//! - Store compiled routes
//! - Look up the matching route for a request path
//! - Return the matched view with its parameters, or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (shared without locks)
//! - Literal routes are tried before parameterized ones, each group in table order
//! - Explicit `NoRouteMatched` rather than a silent default

use std::fmt;

use crate::routing::matcher::{Params, RoutePattern};
use crate::routing::RoutingError;

/// Identifier of a view registered with the render engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A pattern bound to a view.
#[derive(Debug, Clone)]
pub struct Route {
    pub pattern: RoutePattern,
    pub view: ViewId,
}

impl Route {
    pub fn new(pattern: &str, view: impl Into<ViewId>) -> Result<Self, RoutingError> {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            view: view.into(),
        })
    }
}

/// The resolved view plus the parameters extracted from the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub view: ViewId,
    pub params: Params,
}

impl MatchResult {
    /// Look up a bound parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered, immutable route table.
#[derive(Debug, Default)]
pub struct RouteTable {
    /// Routes without parameters, in table order.
    literal: Vec<Route>,
    /// Routes with at least one parameter, in table order.
    parameterized: Vec<Route>,
}

impl RouteTable {
    /// Build a table from routes in declaration order.
    pub fn new(routes: Vec<Route>) -> Self {
        let (literal, parameterized) = routes
            .into_iter()
            .partition(|route| route.pattern.is_literal());
        Self {
            literal,
            parameterized,
        }
    }

    /// Resolve a request path to a view.
    pub fn resolve(&self, path: &str) -> Result<MatchResult, RoutingError> {
        self.literal
            .iter()
            .chain(self.parameterized.iter())
            .find_map(|route| {
                route.pattern.matches(path).map(|params| MatchResult {
                    view: route.view.clone(),
                    params,
                })
            })
            .ok_or_else(|| RoutingError::NoRouteMatched(path.to_string()))
    }

    /// Number of routes in the table.
    pub fn len(&self) -> usize {
        self.literal.len() + self.parameterized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
