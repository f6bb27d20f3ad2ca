//! `printerp-kpi` — operational and financial KPIs for a print shop tenant.
//!
//! The [`KpiController`] trait is the contract the HTTP layer binds routes to.
//! [`DefaultKpiController`] computes KPIs from read-model rows supplied by a
//! [`KpiSource`].

pub mod controller;
pub mod error;
pub mod financial;
pub mod model;
pub mod operational;
pub mod store;
pub mod window;

pub use controller::{DefaultKpiController, KpiController};
pub use error::KpiError;
pub use financial::FinancialKpis;
pub use model::{InvoiceRecord, JobStatus, PressShift, ProductionJob};
pub use operational::OperationalKpis;
pub use store::{InMemoryKpiStore, KpiSource};
pub use window::KpiWindow;
