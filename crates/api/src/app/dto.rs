use axum::extract::{Query, rejection::QueryRejection};
use axum::http::StatusCode;
use axum::response::Response;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use printerp_admin::VersionInfo;
use printerp_kpi::{KpiError, KpiWindow};

use crate::app::errors;

/// `?from=..&to=..` on the KPI routes (RFC 3339 instants, both optional).
#[derive(Debug, Default, Deserialize)]
pub struct KpiWindowQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl KpiWindowQuery {
    /// Maps both extractor rejections and bad values onto the `invalid_query` /
    /// `invalid_window` JSON errors.
    pub fn window_from(query: Result<Query<Self>, QueryRejection>) -> Result<KpiWindow, Response> {
        let Query(query) = query.map_err(|rejection| {
            errors::json_error(StatusCode::BAD_REQUEST, "invalid_query", rejection.body_text())
        })?;
        query.into_window()
    }

    pub fn into_window(self) -> Result<KpiWindow, Response> {
        let from = parse_instant("from", self.from.as_deref())?;
        let to = parse_instant("to", self.to.as_deref())?;
        KpiWindow::new(from, to).map_err(|e| errors::kpi_error_to_response(KpiError::from(e)))
    }
}

fn parse_instant(
    name: &str,
    raw: Option<&str>,
) -> Result<Option<DateTime<Utc>>, Response> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|e| {
            errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_query",
                format!("'{name}' must be an RFC 3339 timestamp: {e}"),
            )
        })
}

/// Body of `GET /version`.
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
    pub commit: &'static str,
    pub build_date: &'static str,
    pub revision: String,
}

impl From<VersionInfo> for VersionResponse {
    fn from(info: VersionInfo) -> Self {
        Self {
            version: info.version,
            commit: info.commit,
            build_date: info.build_date,
            revision: info.revision(),
        }
    }
}
