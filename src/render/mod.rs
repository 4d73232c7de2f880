//! Render subsystem.
//!
//! # Data Flow
//! ```text
//! MatchResult (view id + params)
//!     → engine.rs (look up view, wrap in layout)
//!     → view.rs (tree of elements, text, components, directives)
//!     → head.rs (accumulate title/meta/link declarations)
//!     → Return: RenderOutcome (markup + head | redirect | status)
//! ```
//!
//! # Design Decisions
//! - Views are a closed enum composed by nesting
//! - Head metadata flows through an explicit accumulator
//! - Routing directives are part of the tagged outcome, never unwinding

pub mod engine;
pub mod escape;
pub mod head;
pub mod view;

pub use engine::{LayoutFn, RenderEngine, RenderError, RenderOutcome, ViewRegistry};
pub use head::{Head, HeadAccumulator, HeadDecl, LinkTag, MetaTag};
pub use view::{el, Element, Redirect, View, ViewError, ViewFn};
