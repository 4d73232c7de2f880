//! Startup orchestration.
//!
//! # Responsibilities
//! - Apply the `PORT` override and validate the final config
//! - Load the asset manifest
//! - Compile the route table and check every route has a view
//! - Assemble the dispatcher before any listener is bound
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Traffic is only accepted once the dispatcher exists

use thiserror::Error;

use crate::app;
use crate::assets::{AssetManifest, ManifestError};
use crate::compose::Composer;
use crate::config::{validate_config, ConfigError, ServerConfig};
use crate::http::Dispatcher;
use crate::render::RenderEngine;
use crate::routing::{RouteTable, RoutingError, ViewId};

/// Errors that prevent the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("asset manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("route table error: {0}")]
    Routing(#[from] RoutingError),

    #[error("route points at unregistered view '{0}'")]
    UnregisteredView(ViewId),

    #[error("failed to bind listener: {0}")]
    Bind(#[from] std::io::Error),
}

/// Apply the port override and validate the result, reporting every problem at once.
pub fn prepare_config(
    mut config: ServerConfig,
    port_override: Option<&str>,
) -> Result<ServerConfig, StartupError> {
    let mut errors = Vec::new();
    if let Some(port) = port_override {
        if let Err(e) = config.apply_port(port) {
            errors.push(e);
        }
    }
    if let Err(invalid) = validate_config(&config) {
        errors.extend(invalid);
    }
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors).into());
    }
    Ok(config)
}

/// Load the manifest named in the config and build the dispatcher.
pub fn build_dispatcher(config: &ServerConfig) -> Result<Dispatcher, StartupError> {
    let manifest = AssetManifest::load(&config.assets.manifest_path)?;
    dispatcher_from_manifest(config, &manifest)
}

/// Build the dispatcher from an already loaded manifest.
pub fn dispatcher_from_manifest(
    config: &ServerConfig,
    manifest: &AssetManifest,
) -> Result<Dispatcher, StartupError> {
    let bundle = manifest.bundle(&config.assets.bundle)?;

    let routes = app::routes()?;
    let views = app::views();
    if let Some(route) = routes.iter().find(|r| !views.contains(&r.view)) {
        return Err(StartupError::UnregisteredView(route.view.clone()));
    }

    let table = RouteTable::new(routes);
    let engine = RenderEngine::new(views).with_layout(app::layout);
    let composer = Composer::new(bundle, config.document_settings());

    tracing::info!(
        routes = table.len(),
        bundle = %config.assets.bundle,
        scripts = bundle.scripts.len(),
        styles = bundle.styles.len(),
        "Render pipeline ready"
    );
    Ok(Dispatcher::new(table, engine, composer))
}
