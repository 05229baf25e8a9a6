/// Configuration for the frontend application

/// Base URL the site is served from.
/// - Local development: "/"
/// - Sub-path deployments set `ABZARESTAN_BASE_URL` at build time
pub const BASE_URL: &str = match option_env!("ABZARESTAN_BASE_URL") {
    Some(url) => url,
    None => "/",
};

/// Directory holding the static `article-{id}.html` documents.
pub const ARTICLES_PATH: &str = match option_env!("ABZARESTAN_ARTICLES_PATH") {
    Some(path) => path,
    None => "/data/articles",
};

/// Site logo shown by the page loader and the header.
pub const LOGO_PATH: &str = "/assets/logo/logo.svg";

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}/{}", BASE_URL.trim_end_matches('/'), path)
}

/// Most verbose `tracing` level forwarded to the browser console.
pub const LOG_LEVEL: tracing::Level =
    if cfg!(debug_assertions) { tracing::Level::DEBUG } else { tracing::Level::INFO };
