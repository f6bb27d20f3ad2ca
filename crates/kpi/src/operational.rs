//! Shop-floor KPIs: throughput, delivery performance, press utilization.

use chrono::{DateTime, Utc};
use serde::Serialize;

use printerp_core::TenantId;

use crate::model::{JobStatus, PressShift, ProductionJob};
use crate::window::KpiWindow;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationalKpis {
    pub tenant_id: TenantId,
    pub window: KpiWindow,
    pub generated_at: DateTime<Utc>,

    pub jobs_total: u64,
    pub jobs_queued: u64,
    pub jobs_in_progress: u64,
    pub jobs_completed: u64,
    pub jobs_cancelled: u64,
    /// Open jobs already past their due date.
    pub jobs_late: u64,

    /// Share of `jobs_completed` delivered by their due date (0.0..=1.0).
    pub on_time_delivery_rate: Option<f64>,
    pub average_turnaround_hours: Option<f64>,

    pub press_hours: f64,
    pub available_press_hours: f64,
    pub press_utilization: Option<f64>,
}

/// Jobs are selected by `created_at`, shifts by `starts_at`.
pub fn compute(
    tenant_id: TenantId,
    window: KpiWindow,
    now: DateTime<Utc>,
    jobs: &[ProductionJob],
    shifts: &[PressShift],
) -> OperationalKpis {
    let jobs: Vec<&ProductionJob> = jobs.iter().filter(|j| window.contains(j.created_at)).collect();

    let count = |status: JobStatus| jobs.iter().filter(|j| j.status == status).count() as u64;

    let deliveries: Vec<bool> = jobs.iter().filter_map(|j| j.delivered_on_time()).collect();
    let on_time = deliveries.iter().filter(|ok| **ok).count();

    let turnarounds: Vec<f64> = jobs.iter().filter_map(|j| j.turnaround_hours()).collect();

    let press_hours: f64 = jobs.iter().map(|j| j.press_hours).sum();
    let available_press_hours: f64 = shifts
        .iter()
        .filter(|s| window.contains(s.starts_at))
        .map(|s| s.available_hours)
        .sum();

    OperationalKpis {
        tenant_id,
        window,
        generated_at: now,
        jobs_total: jobs.len() as u64,
        jobs_queued: count(JobStatus::Queued),
        jobs_in_progress: count(JobStatus::InProgress),
        jobs_completed: count(JobStatus::Completed),
        jobs_cancelled: count(JobStatus::Cancelled),
        jobs_late: jobs.iter().filter(|j| j.is_late(now)).count() as u64,
        on_time_delivery_rate: ratio(on_time as f64, deliveries.len() as f64),
        average_turnaround_hours: ratio(turnarounds.iter().sum(), turnarounds.len() as f64),
        press_hours,
        available_press_hours,
        press_utilization: ratio(press_hours, available_press_hours),
    }
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        Some(numerator / denominator)
    } else {
        None
    }
}
