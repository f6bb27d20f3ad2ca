//! Read-model rows the KPIs are computed from.
//!
//! These are projections maintained elsewhere (job tickets, invoicing, press
//! scheduling); the KPI layer only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Queued,
    InProgress,
    Completed,
    Cancelled,
}

impl JobStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, JobStatus::Queued | JobStatus::InProgress)
    }
}

/// A print job ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionJob {
    pub job_id: Uuid,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub due_at: Option<DateTime<Utc>>,
    /// Press time booked against the job so far.
    pub press_hours: f64,
}

impl ProductionJob {
    /// Completed no later than the due date. Jobs without a due date count as on
    /// time; a completed job with no recorded completion time counts as late.
    pub fn delivered_on_time(&self) -> Option<bool> {
        if self.status != JobStatus::Completed {
            return None;
        }
        Some(
            self.completed_at
                .is_some_and(|completed| self.due_at.is_none_or(|due| completed <= due)),
        )
    }

    /// Still open and past its due date at `now`.
    pub fn is_late(&self, now: DateTime<Utc>) -> bool {
        self.status.is_open() && self.due_at.is_some_and(|due| due < now)
    }

    pub fn turnaround_hours(&self) -> Option<f64> {
        if self.status != JobStatus::Completed {
            return None;
        }
        let started = self.started_at?;
        let completed = self.completed_at?;
        Some((completed - started).num_seconds() as f64 / 3600.0)
    }
}

/// A customer invoice. Amounts are integer minor units (cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub invoice_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    pub total: i64,
    pub cost_of_goods: i64,
    pub amount_paid: i64,
}

impl InvoiceRecord {
    pub fn balance_due(&self) -> i64 {
        self.total.saturating_sub(self.amount_paid).max(0)
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.balance_due() > 0 && self.due_at < now
    }
}

/// Press capacity available during one scheduled shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressShift {
    pub press: String,
    pub starts_at: DateTime<Utc>,
    pub available_hours: f64,
}
