//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (route lookup)
//!     → matcher.rs (segment-by-segment pattern match)
//!     → Return: MatchResult (view + params) or NoRouteMatched
//!
//! Route compilation (at startup):
//!     (pattern, view) pairs
//!     → Parse patterns
//!     → Split into literal and parameterized groups, order preserved
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same path always resolves to the same route
//! - Literal routes take precedence over parameterized routes

use thiserror::Error;

pub mod matcher;
pub mod router;

pub use matcher::{Params, RoutePattern, Segment};
pub use router::{MatchResult, Route, RouteTable, ViewId};

/// Errors produced while compiling or resolving routes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoutingError {
    /// No route in the table matches the path.
    #[error("no route matched path '{0}'")]
    NoRouteMatched(String),

    /// A route pattern could not be compiled.
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
