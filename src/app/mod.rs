//! The application served by the pipeline: route table, views and layout.
//!
//! ```text
//! /        → hello       "Hello world!"
//! /:name   → hello_name  "Hello {name}!", title "appname | Hello {name}!"
//! ```

pub mod views;

use crate::render::ViewRegistry;
use crate::routing::{Route, RoutingError};

pub use views::layout;

/// Route table in declaration order.
pub fn routes() -> Result<Vec<Route>, RoutingError> {
    Ok(vec![
        Route::new("/", "hello")?,
        Route::new("/:name", "hello_name")?,
    ])
}

/// Views the routes point at.
pub fn views() -> ViewRegistry {
    ViewRegistry::new()
        .register("hello", views::hello)
        .register("hello_name", views::hello_name)
}
