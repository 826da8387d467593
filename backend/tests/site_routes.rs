use std::fs;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use immortal_flame_server::build_router;
use immortal_flame_server::config::{Environment, ServerConfig};

const SHELL: &str = "<!DOCTYPE html><html><body>immortal flame shell</body></html>";

fn bundle() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), SHELL).unwrap();
    fs::write(dir.path().join("immortal-flame-web-1a2b.js"), "export default 1;").unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets").join("lava-hero.webp"), b"RIFF....WEBP").unwrap();
    dir
}

fn app(dir: &TempDir) -> Router {
    let config = ServerConfig {
        port: 0,
        dist_dir: dir.path().to_path_buf(),
        asset_max_age_secs: 3600,
        environment: Environment::Development,
        sentry_dsn: None,
    };
    config.validate().unwrap();
    build_router(&config).unwrap()
}

async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn health_check_answers_ok() {
    let dir = bundle();
    let (status, _, body) = get(app(&dir), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn root_redirects_to_lava() {
    let dir = bundle();
    let (status, headers, _) = get(app(&dir), "/").await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(headers[header::LOCATION], "/lava");
}

#[tokio::test]
async fn landing_flows_get_the_shell() {
    let dir = bundle();
    for page in ["/lava", "/immortal-room"] {
        let (status, headers, body) = get(app(&dir), page).await;
        assert_eq!(status, StatusCode::OK, "{page}");
        assert_eq!(body, SHELL, "{page}");
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
    }
}

#[tokio::test]
async fn assets_are_cached() {
    let dir = bundle();
    let (status, headers, _) = get(app(&dir), "/assets/lava-hero.webp").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=3600");
}

#[tokio::test]
async fn missing_assets_are_not_cached() {
    let dir = bundle();
    let (status, headers, _) = get(app(&dir), "/assets/not-yet-deployed.webp").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(headers.get(header::CACHE_CONTROL).is_none());
}

#[tokio::test]
async fn bundle_files_are_served_from_the_root() {
    let dir = bundle();
    let (status, _, body) = get(app(&dir), "/immortal-flame-web-1a2b.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "export default 1;");
}

#[tokio::test]
async fn unknown_paths_get_the_shell_with_404() {
    let dir = bundle();
    let (status, _, body) = get(app(&dir), "/no-such-flame").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, SHELL);
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let dir = bundle();
    let (_, headers, _) = get(app(&dir), "/lava").await;
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(
        headers[header::REFERRER_POLICY],
        "strict-origin-when-cross-origin"
    );
}
