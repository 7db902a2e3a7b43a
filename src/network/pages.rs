//! Static HTML pages served from the configured static directory

use std::path::Path;

use axum::http::StatusCode;

use crate::protocol::Response;

/// Usage help, returned for non-POST requests to `/update`
pub const UPDATE_PAGE: &str = "update.html";

/// Returned when an update body cannot be parsed
pub const BAD_UPDATE_PAGE: &str = "badupdate.html";

/// Serve `static_dir/name` with the given status
///
/// A page that cannot be read turns into a 500.
pub(crate) async fn serve_page(static_dir: &Path, name: &str, status: StatusCode) -> Response {
    let path = static_dir.join(name);

    match tokio::fs::read(&path).await {
        Ok(page) => Response::html(status, page),
        Err(e) => {
            tracing::error!("Unable to read static page {}: {}", path.display(), e);
            Response::text(StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error")
        }
    }
}
