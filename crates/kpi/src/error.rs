use thiserror::Error;

use printerp_core::DomainError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KpiError {
    #[error("invalid reporting window: {0}")]
    InvalidWindow(#[from] DomainError),

    /// The read model behind the KPIs could not be read.
    #[error("kpi source unavailable: {0}")]
    Source(String),
}
