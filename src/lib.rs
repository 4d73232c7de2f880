//! Server-side rendering pipeline library.

// Request pipeline
pub mod routing;
pub mod render;
pub mod compose;
pub mod http;

// Application served by the pipeline
pub mod app;

// Build output
pub mod assets;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::{Dispatch, Dispatcher, HttpServer};
pub use lifecycle::Shutdown;
