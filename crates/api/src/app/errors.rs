use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use printerp_kpi::KpiError;

pub fn kpi_error_to_response(err: KpiError) -> axum::response::Response {
    match err {
        KpiError::InvalidWindow(e) => json_error(StatusCode::BAD_REQUEST, "invalid_window", e.to_string()),
        KpiError::Source(msg) => {
            tracing::error!(error = %msg, "kpi source failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "kpi_source_error", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
