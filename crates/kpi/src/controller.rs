//! The KPI capability contract and its default implementation.

use chrono::{DateTime, Utc};

use printerp_core::TenantId;

use crate::error::KpiError;
use crate::financial::{self, FinancialKpis};
use crate::operational::{self, OperationalKpis};
use crate::store::KpiSource;
use crate::window::KpiWindow;

/// The two capabilities the `/api/kpis` routes delegate to.
///
/// Implementations are shared behind an `Arc` by the router, so every routed
/// call reaches the same instance.
pub trait KpiController: Send + Sync {
    fn get_operational_kpis(
        &self,
        tenant_id: TenantId,
        window: KpiWindow,
        now: DateTime<Utc>,
    ) -> Result<OperationalKpis, KpiError>;

    fn get_financial_kpis(
        &self,
        tenant_id: TenantId,
        window: KpiWindow,
        now: DateTime<Utc>,
    ) -> Result<FinancialKpis, KpiError>;
}

#[derive(Debug, Clone)]
pub struct DefaultKpiController<S> {
    source: S,
}

impl<S: KpiSource> DefaultKpiController<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: KpiSource> KpiController for DefaultKpiController<S> {
    fn get_operational_kpis(
        &self,
        tenant_id: TenantId,
        window: KpiWindow,
        now: DateTime<Utc>,
    ) -> Result<OperationalKpis, KpiError> {
        let jobs = self.source.jobs(tenant_id)?;
        let shifts = self.source.press_shifts(tenant_id)?;

        let kpis = operational::compute(tenant_id, window, now, &jobs, &shifts);
        tracing::debug!(
            %tenant_id,
            jobs = kpis.jobs_total,
            shifts = shifts.len(),
            "operational kpis computed"
        );
        Ok(kpis)
    }

    fn get_financial_kpis(
        &self,
        tenant_id: TenantId,
        window: KpiWindow,
        now: DateTime<Utc>,
    ) -> Result<FinancialKpis, KpiError> {
        let invoices = self.source.invoices(tenant_id)?;

        let kpis = financial::compute(tenant_id, window, now, &invoices)?;
        tracing::debug!(%tenant_id, invoices = kpis.invoice_count, "financial kpis computed");
        Ok(kpis)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Duration;
    use uuid::Uuid;

    use super::*;
    use crate::model::{InvoiceRecord, JobStatus, PressShift, ProductionJob};
    use crate::store::InMemoryKpiStore;

    struct FailingSource;

    impl KpiSource for FailingSource {
        fn jobs(&self, _tenant_id: TenantId) -> Result<Vec<ProductionJob>, KpiError> {
            Err(KpiError::Source("jobs projection offline".to_string()))
        }

        fn invoices(&self, _tenant_id: TenantId) -> Result<Vec<InvoiceRecord>, KpiError> {
            Err(KpiError::Source("invoice projection offline".to_string()))
        }

        fn press_shifts(&self, _tenant_id: TenantId) -> Result<Vec<PressShift>, KpiError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn computes_from_tenant_rows_only() {
        let store = Arc::new(InMemoryKpiStore::new());
        let tenant = TenantId::new();
        let other = TenantId::new();
        let now = Utc::now();

        store.upsert_invoice(
            tenant,
            InvoiceRecord {
                invoice_id: Uuid::now_v7(),
                issued_at: now - Duration::days(1),
                due_at: now + Duration::days(29),
                total: 12_500,
                cost_of_goods: 7_500,
                amount_paid: 0,
            },
        );
        store.upsert_job(
            other,
            ProductionJob {
                job_id: Uuid::now_v7(),
                status: JobStatus::Queued,
                created_at: now,
                started_at: None,
                completed_at: None,
                due_at: None,
                press_hours: 0.0,
            },
        );

        let controller = DefaultKpiController::new(store);

        let fin = controller
            .get_financial_kpis(tenant, KpiWindow::unbounded(), now)
            .unwrap();
        assert_eq!(fin.revenue, 12_500);
        assert_eq!(fin.outstanding_receivables, 12_500);

        let ops = controller
            .get_operational_kpis(tenant, KpiWindow::unbounded(), now)
            .unwrap();
        assert_eq!(ops.jobs_total, 0);
    }

    #[test]
    fn source_errors_propagate() {
        let controller = DefaultKpiController::new(FailingSource);
        let now = Utc::now();

        assert!(matches!(
            controller.get_operational_kpis(TenantId::new(), KpiWindow::unbounded(), now),
            Err(KpiError::Source(_))
        ));
        assert!(matches!(
            controller.get_financial_kpis(TenantId::new(), KpiWindow::unbounded(), now),
            Err(KpiError::Source(_))
        ));
    }
}
