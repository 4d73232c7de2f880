//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::compose::DocumentSettings;
use crate::config::validation::ValidationError;

/// Environment variable that overrides the listener port.
pub const PORT_ENV: &str = "PORT";

/// Root configuration for the server.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Asset manifest and public directory.
    pub assets: AssetsConfig,

    /// Document skeleton settings.
    pub document: DocumentConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl ServerConfig {
    /// Replace the port of the bind address.
    ///
    /// An unparsable bind address is left alone; `validate_config` reports it.
    pub fn apply_port(&mut self, port: &str) -> Result<(), ValidationError> {
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidPortOverride(port.to_string()))?;
        if let Ok(mut addr) = self.listener.bind_address.parse::<SocketAddr>() {
            addr.set_port(port);
            self.listener.bind_address = addr.to_string();
        }
        Ok(())
    }

    /// Settings handed to the composer.
    pub fn document_settings(&self) -> DocumentSettings {
        DocumentSettings {
            lang: self.document.lang.clone(),
            root_id: self.document.root_id.clone(),
            public_path: self.assets.public_path.clone(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Build output locations.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AssetsConfig {
    /// Path of the JSON manifest written by the bundler.
    pub manifest_path: PathBuf,

    /// Bundle whose files are injected into every page.
    pub bundle: String,

    /// Directory served as static files before the render pipeline.
    pub public_dir: PathBuf,

    /// URL prefix for relative manifest entries. Must end in `/`.
    pub public_path: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from("build/manifest.json"),
            bundle: "main".to_string(),
            public_dir: PathBuf::from("public"),
            public_path: "/".to_string(),
        }
    }
}

/// Document skeleton configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DocumentConfig {
    /// `<html lang>` attribute.
    pub lang: String,

    /// Id of the element the client hydrates.
    pub root_id: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            root_id: "root".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Prometheus exporter bind address. Metrics are not exported when unset.
    pub metrics_address: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_address: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.assets.bundle, "main");
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_partial_sections() {
        let config: ServerConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:8080"

            [assets]
            manifest_path = "dist/manifest.json"
            public_path = "/static/"

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
        assert_eq!(config.assets.manifest_path, PathBuf::from("dist/manifest.json"));
        assert_eq!(config.assets.bundle, "main");
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.document_settings().public_path, "/static/");
    }

    #[test]
    fn test_port_override() {
        let mut config = ServerConfig::default();
        config.apply_port("8081").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8081");

        assert_eq!(
            config.apply_port("not-a-port"),
            Err(ValidationError::InvalidPortOverride("not-a-port".to_string()))
        );
        assert_eq!(config.listener.bind_address, "0.0.0.0:8081");
    }
}
