//! `GET {prefix}/operational` and `GET {prefix}/financial`.
//!
//! Both routes delegate to a shared [`KpiController`]. Each handler closes over
//! its own `Arc` clone of the controller, so every request reaches the
//! instance that was bound at startup.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use printerp_core::TenantId;
use printerp_kpi::{KpiController, KpiError, KpiWindow};

use crate::app::dto::KpiWindowQuery;
use crate::app::errors;
use crate::app::route_table::RouteTable;
use crate::context::RequestContext;

pub const KPI_PREFIX: &str = "/api/kpis";

pub const OPERATIONAL: &str = "get_operational_kpis";
pub const FINANCIAL: &str = "get_financial_kpis";

pub fn bind(table: &mut RouteTable, prefix: &str, controller: Arc<dyn KpiController>) {
    let operational = Arc::clone(&controller);
    table.get(
        &format!("{prefix}/operational"),
        OPERATIONAL,
        move |Extension(ctx): Extension<RequestContext>,
              query: Result<Query<KpiWindowQuery>, QueryRejection>| {
            let controller = Arc::clone(&operational);
            async move {
                respond(&ctx, OPERATIONAL, query, |tenant_id, window, now| {
                    controller.get_operational_kpis(tenant_id, window, now)
                })
            }
        },
    );

    let financial = controller;
    table.get(
        &format!("{prefix}/financial"),
        FINANCIAL,
        move |Extension(ctx): Extension<RequestContext>,
              query: Result<Query<KpiWindowQuery>, QueryRejection>| {
            let controller = Arc::clone(&financial);
            async move {
                respond(&ctx, FINANCIAL, query, |tenant_id, window, now| {
                    controller.get_financial_kpis(tenant_id, window, now)
                })
            }
        },
    );
}

fn respond<K: Serialize>(
    ctx: &RequestContext,
    capability: &'static str,
    query: Result<Query<KpiWindowQuery>, QueryRejection>,
    call: impl FnOnce(TenantId, KpiWindow, DateTime<Utc>) -> Result<K, KpiError>,
) -> Response {
    let window = match KpiWindowQuery::window_from(query) {
        Ok(w) => w,
        Err(resp) => return resp,
    };

    tracing::info!(
        tenant_id = %ctx.tenant_id(),
        principal_id = %ctx.principal_id(),
        roles = ?ctx.roles(),
        capability,
        "kpi request"
    );

    match call(ctx.tenant_id(), window, Utc::now()) {
        Ok(kpis) => (StatusCode::OK, Json(kpis)).into_response(),
        Err(e) => errors::kpi_error_to_response(e),
    }
}
