//! Reporting window applied to KPI source rows.

use chrono::{DateTime, Utc};
use serde::Serialize;

use printerp_core::{DomainError, DomainResult};

/// Inclusive `[from, to]` bounds; a missing bound is open.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KpiWindow {
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
}

impl KpiWindow {
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> DomainResult<Self> {
        if let (Some(f), Some(t)) = (from, to) {
            if f > t {
                return Err(DomainError::validation(format!(
                    "'from' ({}) is after 'to' ({})",
                    f.to_rfc3339(),
                    t.to_rfc3339()
                )));
            }
        }
        Ok(Self { from, to })
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn from(&self) -> Option<DateTime<Utc>> {
        self.from
    }

    pub fn to(&self) -> Option<DateTime<Utc>> {
        self.to
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from.is_none_or(|f| at >= f) && self.to.is_none_or(|t| at <= t)
    }
}
