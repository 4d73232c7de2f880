//! Shared utilities for integration tests.

use std::fs;
use std::net::SocketAddr;

use ssr_server::assets::{AssetBundle, AssetManifest};
use ssr_server::config::ServerConfig;
use ssr_server::http::{Dispatcher, HttpServer};
use ssr_server::lifecycle::{dispatcher_from_manifest, Shutdown};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Manifest with one script and one stylesheet in the `main` bundle.
pub fn manifest() -> AssetManifest {
    let mut manifest = AssetManifest::default();
    manifest.insert(
        "main",
        AssetBundle::new(vec!["main-abc.js".into()], vec!["main-abc.css".into()]),
    );
    manifest
}

/// Public directory holding the built assets.
pub fn public_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main-abc.js"), "console.log('hydrate');").unwrap();
    fs::write(dir.path().join("main-abc.css"), "body { margin: 0; }").unwrap();
    fs::write(dir.path().join("robots.txt"), "User-agent: *\n").unwrap();
    dir
}

/// Config pointing at `public`.
pub fn config(public: &TempDir) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.assets.public_dir = public.path().to_path_buf();
    config
}

/// Dispatcher for the bundled application.
pub fn app_dispatcher(config: &ServerConfig) -> Dispatcher {
    dispatcher_from_manifest(config, &manifest()).unwrap()
}

/// Start a server on an ephemeral port. Drop or trigger the returned `Shutdown` to stop it.
#[allow(dead_code)]
pub async fn start_server(config: ServerConfig, dispatcher: Dispatcher) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, dispatcher);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Client that reports redirects instead of following them.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
