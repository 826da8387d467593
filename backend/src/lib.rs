use axum::http::{header, HeaderValue, Response};
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod handlers {
    pub mod site_handlers;
}

use config::ServerConfig;
use error::ServerError;
use handlers::site_handlers;

/// Long-lived caching only for files that exist, so a missing asset is
/// retried once it is deployed.
fn cache_successful<B>(value: HeaderValue) -> impl Fn(&Response<B>) -> Option<HeaderValue> + Clone {
    move |res: &Response<B>| res.status().is_success().then(|| value.clone())
}

/// Routes for the built frontend bundle:
/// health check, root redirect, SPA shell for the landing flows, long-cached
/// `/assets`, everything else straight from the bundle with the shell as a
/// 404 page.
pub fn build_router(config: &ServerConfig) -> Result<Router, ServerError> {
    let index = config.index_file();
    let cache_control = HeaderValue::from_str(&format!(
        "public, max-age={}",
        config.asset_max_age_secs
    ))?;

    let assets = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            cache_successful(cache_control),
        ))
        .service(ServeDir::new(config.dist_dir.join("assets")));

    let mut router = Router::new()
        .route("/health", get(site_handlers::health_check))
        .route("/", get(site_handlers::root_redirect));
    for page in site_handlers::PAGE_ROUTES {
        router = router.route_service(page, ServeFile::new(&index));
    }

    let router = router
        .nest_service("/assets", assets)
        .fallback_service(ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(&index)))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );
    Ok(router)
}
