use std::sync::Arc;

use super::route_table::RouteTable;
use super::services::AppServices;

pub mod kpis;
pub mod system;

/// Register every authenticated (tenant-scoped) endpoint.
pub fn bind_protected(table: &mut RouteTable, services: &AppServices) {
    kpis::bind(table, kpis::KPI_PREFIX, Arc::clone(&services.kpis));
}
