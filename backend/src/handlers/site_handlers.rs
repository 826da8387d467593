use axum::response::Redirect;

/// Landing flow served at the site root.
pub const DEFAULT_PAGE: &str = "/lava";

/// Client-side routes that render the SPA shell with 200.
pub const PAGE_ROUTES: [&str; 2] = ["/lava", "/immortal-room"];

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn root_redirect() -> Redirect {
    Redirect::temporary(DEFAULT_PAGE)
}
