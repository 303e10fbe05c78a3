//! Dashboard pages and static assets of the compiled WASM bundle.
//!
//! Both pages serve the same `index.html` shell; the dashboard decides at
//! startup which panel to mount from the location path.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Paths that render the dashboard shell.
pub const PAGE_PATHS: [&str; 2] = ["/manage_rooms", "/pair"];

/// Build the page and asset routes for the bundle found in `dist_dir`.
///
/// Each page is also reachable with a trailing slash. `/` and any other
/// directory path fall through to [`ServeDir`], which answers with the
/// directory's `index.html`.
pub fn routes<S>(dist_dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let index = dist_dir.join("index.html");

    PAGE_PATHS
        .into_iter()
        .fold(Router::new(), |router, path| {
            router
                .route_service(path, ServeFile::new(&index))
                .route_service(&format!("{path}/"), ServeFile::new(&index))
        })
        .fallback_service(ServeDir::new(dist_dir))
}
