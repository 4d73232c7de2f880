//! End-to-end tests of the render pipeline through the layered router.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use tower::ServiceExt;

use ssr_server::compose::{Composer, DocumentSettings};
use ssr_server::http::{Dispatch, Dispatcher, HttpServer};
use ssr_server::render::{Redirect, RenderEngine, View, ViewError, ViewRegistry};
use ssr_server::routing::{Params, Route, RouteTable};

mod common;

async fn send(server: &HttpServer, method: Method, path: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    server.router().oneshot(request).await.unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn app_server() -> (HttpServer, tempfile::TempDir) {
    let public = common::public_dir();
    let config = common::config(&public);
    let dispatcher = common::app_dispatcher(&config);
    (HttpServer::new(config, dispatcher), public)
}

#[tokio::test]
async fn test_root_renders_hello_world() {
    let (server, _public) = app_server();
    let response = send(&server, Method::GET, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    let body = body_string(response).await;
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Hello world!"));
    assert!(body.contains("<title>appname</title>"));
}

#[tokio::test]
async fn test_named_route_renders_greeting_and_title() {
    let (server, _public) = app_server();
    let body = body_string(send(&server, Method::GET, "/foo").await).await;

    assert!(body.contains("<h1>Hello foo!</h1>"));
    assert!(body.contains("<title>appname | Hello foo!</title>"));
    // Layout metadata comes before page metadata
    let viewport = body.find("name=\"viewport\"").unwrap();
    let icon = body.find("rel=\"icon\"").unwrap();
    let title = body.find("<title>").unwrap();
    assert!(title < viewport && viewport < icon);
}

#[tokio::test]
async fn test_manifest_assets_are_spliced() {
    let (server, _public) = app_server();
    let body = body_string(send(&server, Method::GET, "/foo").await).await;

    let head_end = body.find("</head>").unwrap();
    assert_eq!(body.matches("rel=\"stylesheet\"").count(), 1);
    let stylesheet = body
        .find(r#"<link rel="stylesheet" href="/main-abc.css">"#)
        .unwrap();
    assert!(stylesheet < head_end);

    assert_eq!(body.matches("<script").count(), 1);
    assert!(body.ends_with(r#"<script src="/main-abc.js"></script></body></html>"#));
    assert!(body.contains(r#"<div id="root"><div><h1>Hello foo!</h1></div></div>"#));
}

#[tokio::test]
async fn test_unmatched_path_is_not_found_without_body() {
    let (server, _public) = app_server();
    let response = send(&server, Method::GET, "/a/b/c").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.is_empty());
}

#[tokio::test]
async fn test_identical_requests_produce_identical_documents() {
    let (server, _public) = app_server();
    let first = body_string(send(&server, Method::GET, "/foo").await).await;
    let second = body_string(send(&server, Method::GET, "/foo").await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_static_files_bypass_the_pipeline() {
    let (server, _public) = app_server();

    let script = send(&server, Method::GET, "/main-abc.js").await;
    assert_eq!(script.status(), StatusCode::OK);
    assert_eq!(body_string(script).await, "console.log('hydrate');");

    // `/robots.txt` would otherwise match `/:name`
    let robots = body_string(send(&server, Method::GET, "/robots.txt").await).await;
    assert_eq!(robots, "User-agent: *\n");
}

#[tokio::test]
async fn test_public_directories_fall_through_to_routes() {
    let public = common::public_dir();
    std::fs::create_dir(public.path().join("images")).unwrap();
    std::fs::write(public.path().join("images").join("logo.svg"), "<svg/>").unwrap();
    let config = common::config(&public);
    let server = HttpServer::new(config.clone(), common::app_dispatcher(&config));

    for path in ["/images", "/images/"] {
        let response = send(&server, Method::GET, path).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", path);
        let body = body_string(response).await;
        assert!(body.contains("<h1>Hello images!</h1>"), "{}", path);
    }

    let root = body_string(send(&server, Method::GET, "/").await).await;
    assert!(root.contains("Hello world!"));

    let logo = send(&server, Method::GET, "/images/logo.svg").await;
    assert_eq!(logo.status(), StatusCode::OK);
    assert_eq!(body_string(logo).await, "<svg/>");
}

#[tokio::test]
async fn test_any_method_reaches_the_pipeline() {
    let (server, _public) = app_server();
    let response = send(&server, Method::POST, "/foo").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Hello foo!"));
}

#[tokio::test]
async fn test_request_id_is_assigned() {
    let (server, _public) = app_server();
    let response = send(&server, Method::GET, "/").await;
    assert!(response.headers().contains_key("x-request-id"));
}

fn old_home(_: &Params) -> Result<View, ViewError> {
    Ok(View::fragment([
        View::text("should never be sent"),
        Redirect::to("/").into(),
    ]))
}

fn moved(_: &Params) -> Result<View, ViewError> {
    Ok(Redirect::with_status("/new", StatusCode::MOVED_PERMANENTLY).into())
}

fn teapot(_: &Params) -> Result<View, ViewError> {
    Ok(View::Status(StatusCode::IM_A_TEAPOT))
}

fn failing(_: &Params) -> Result<View, ViewError> {
    Err(ViewError::new("secret internal detail"))
}

fn panicking(_: &Params) -> Result<View, ViewError> {
    panic!("view exploded");
}

fn directive_server() -> (HttpServer, tempfile::TempDir) {
    let public = common::public_dir();
    let config = common::config(&public);

    let routes = RouteTable::new(vec![
        Route::new("/old", "old_home").unwrap(),
        Route::new("/moved", "moved").unwrap(),
        Route::new("/teapot", "teapot").unwrap(),
        Route::new("/failing", "failing").unwrap(),
        Route::new("/panicking", "panicking").unwrap(),
    ]);
    let engine = RenderEngine::new(
        ViewRegistry::new()
            .register("old_home", old_home)
            .register("moved", moved)
            .register("teapot", teapot)
            .register("failing", failing)
            .register("panicking", panicking),
    );
    let composer = Composer::new(
        common::manifest().bundle("main").unwrap(),
        DocumentSettings::default(),
    );
    let dispatcher = Dispatcher::new(routes, engine, composer);
    (HttpServer::new(config, dispatcher), public)
}

#[tokio::test]
async fn test_redirect_defaults_to_307_without_body() {
    let (server, _public) = directive_server();
    let response = send(&server, Method::GET, "/old").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert!(body_string(response).await.is_empty());
}

#[tokio::test]
async fn test_redirect_with_declared_status() {
    let (server, _public) = directive_server();
    let response = send(&server, Method::GET, "/moved").await;
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.headers()[header::LOCATION], "/new");
}

#[tokio::test]
async fn test_bare_status_has_empty_body() {
    let (server, _public) = directive_server();
    let response = send(&server, Method::GET, "/teapot").await;
    assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    assert!(body_string(response).await.is_empty());
}

#[tokio::test]
async fn test_render_failure_is_generic_500() {
    let (server, _public) = directive_server();
    let response = send(&server, Method::GET, "/failing").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(!body.contains("secret internal detail"));
}

#[tokio::test]
async fn test_panicking_view_is_generic_500() {
    let (server, _public) = directive_server();
    let response = send(&server, Method::GET, "/panicking").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body_string(response).await.contains("exploded"));
}

#[test]
fn test_redirect_never_composes() {
    let routes = RouteTable::new(vec![Route::new("/old", "old_home").unwrap()]);
    let engine = RenderEngine::new(ViewRegistry::new().register("old_home", old_home));
    let composer = Composer::new(
        common::manifest().bundle("main").unwrap(),
        DocumentSettings::default(),
    );
    let dispatcher = Dispatcher::new(routes, engine, composer);

    assert_eq!(dispatcher.dispatch("/old"), Dispatch::Redirect(Redirect::to("/")));
}
