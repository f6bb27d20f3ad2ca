use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use printerp_core::TenantId;

use crate::error::KpiError;
use crate::model::{InvoiceRecord, PressShift, ProductionJob};

/// Tenant-isolated read access to KPI source rows.
pub trait KpiSource: Send + Sync {
    fn jobs(&self, tenant_id: TenantId) -> Result<Vec<ProductionJob>, KpiError>;
    fn invoices(&self, tenant_id: TenantId) -> Result<Vec<InvoiceRecord>, KpiError>;
    fn press_shifts(&self, tenant_id: TenantId) -> Result<Vec<PressShift>, KpiError>;
}

impl<S> KpiSource for Arc<S>
where
    S: KpiSource + ?Sized,
{
    fn jobs(&self, tenant_id: TenantId) -> Result<Vec<ProductionJob>, KpiError> {
        (**self).jobs(tenant_id)
    }

    fn invoices(&self, tenant_id: TenantId) -> Result<Vec<InvoiceRecord>, KpiError> {
        (**self).invoices(tenant_id)
    }

    fn press_shifts(&self, tenant_id: TenantId) -> Result<Vec<PressShift>, KpiError> {
        (**self).press_shifts(tenant_id)
    }
}

#[derive(Debug, Default, Clone)]
struct TenantRows {
    jobs: HashMap<uuid::Uuid, ProductionJob>,
    invoices: HashMap<uuid::Uuid, InvoiceRecord>,
    shifts: Vec<PressShift>,
}

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryKpiStore {
    inner: RwLock<HashMap<TenantId, TenantRows>>,
}

impl InMemoryKpiStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a job by `job_id`.
    pub fn upsert_job(&self, tenant_id: TenantId, job: ProductionJob) {
        if let Ok(mut map) = self.inner.write() {
            map.entry(tenant_id).or_default().jobs.insert(job.job_id, job);
        }
    }

    /// Insert or replace an invoice by `invoice_id`.
    pub fn upsert_invoice(&self, tenant_id: TenantId, invoice: InvoiceRecord) {
        if let Ok(mut map) = self.inner.write() {
            map.entry(tenant_id)
                .or_default()
                .invoices
                .insert(invoice.invoice_id, invoice);
        }
    }

    pub fn add_press_shift(&self, tenant_id: TenantId, shift: PressShift) {
        if let Ok(mut map) = self.inner.write() {
            map.entry(tenant_id).or_default().shifts.push(shift);
        }
    }

    /// Drop every row for a tenant (rebuild support).
    pub fn clear_tenant(&self, tenant_id: TenantId) {
        if let Ok(mut map) = self.inner.write() {
            map.remove(&tenant_id);
        }
    }

    fn read<T>(
        &self,
        tenant_id: TenantId,
        f: impl FnOnce(&TenantRows) -> Vec<T>,
    ) -> Result<Vec<T>, KpiError> {
        let map = self
            .inner
            .read()
            .map_err(|_| KpiError::Source("in-memory kpi store lock poisoned".to_string()))?;
        Ok(map.get(&tenant_id).map(f).unwrap_or_default())
    }
}

impl KpiSource for InMemoryKpiStore {
    fn jobs(&self, tenant_id: TenantId) -> Result<Vec<ProductionJob>, KpiError> {
        self.read(tenant_id, |rows| rows.jobs.values().cloned().collect())
    }

    fn invoices(&self, tenant_id: TenantId) -> Result<Vec<InvoiceRecord>, KpiError> {
        self.read(tenant_id, |rows| rows.invoices.values().cloned().collect())
    }

    fn press_shifts(&self, tenant_id: TenantId) -> Result<Vec<PressShift>, KpiError> {
        self.read(tenant_id, |rows| rows.shifts.clone())
    }
}
