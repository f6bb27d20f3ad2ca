use axum::{Json, http::StatusCode};

use crate::app::dto::VersionResponse;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Admin GUI build metadata for display surfaces.
pub async fn version() -> Json<VersionResponse> {
    Json(printerp_admin::gui_version_info().into())
}
