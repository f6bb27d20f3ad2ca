//! Revenue, margin and receivables KPIs. Money is integer minor units.

use chrono::{DateTime, Utc};
use serde::Serialize;

use printerp_core::TenantId;

use crate::error::KpiError;
use crate::model::InvoiceRecord;
use crate::window::KpiWindow;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialKpis {
    pub tenant_id: TenantId,
    pub window: KpiWindow,
    pub generated_at: DateTime<Utc>,

    pub invoice_count: u64,
    pub revenue: i64,
    pub cost_of_goods: i64,
    pub gross_margin: i64,
    pub gross_margin_rate: Option<f64>,

    /// Unpaid balance across the selected invoices.
    pub outstanding_receivables: i64,
    /// Part of `outstanding_receivables` that is past due at `generated_at`.
    pub overdue_receivables: i64,

    /// Truncated toward zero.
    pub average_invoice_value: Option<i64>,
}

/// Invoices are selected by `issued_at`.
///
/// Totals that do not fit in `i64` minor units are reported as a source error.
pub fn compute(
    tenant_id: TenantId,
    window: KpiWindow,
    now: DateTime<Utc>,
    invoices: &[InvoiceRecord],
) -> Result<FinancialKpis, KpiError> {
    let invoices: Vec<&InvoiceRecord> = invoices
        .iter()
        .filter(|i| window.contains(i.issued_at))
        .collect();

    let revenue = checked_sum("revenue", invoices.iter().map(|i| i.total))?;
    let cost_of_goods = checked_sum("cost of goods", invoices.iter().map(|i| i.cost_of_goods))?;
    let gross_margin = revenue
        .checked_sub(cost_of_goods)
        .ok_or_else(|| overflow("gross margin"))?;
    let outstanding_receivables =
        checked_sum("outstanding receivables", invoices.iter().map(|i| i.balance_due()))?;
    let overdue_receivables = checked_sum(
        "overdue receivables",
        invoices
            .iter()
            .filter(|i| i.is_overdue(now))
            .map(|i| i.balance_due()),
    )?;
    let count = invoices.len() as u64;

    Ok(FinancialKpis {
        tenant_id,
        window,
        generated_at: now,
        invoice_count: count,
        revenue,
        cost_of_goods,
        gross_margin,
        gross_margin_rate: (revenue != 0).then(|| gross_margin as f64 / revenue as f64),
        outstanding_receivables,
        overdue_receivables,
        average_invoice_value: (count > 0).then(|| revenue / count as i64),
    })
}

fn checked_sum(what: &str, mut amounts: impl Iterator<Item = i64>) -> Result<i64, KpiError> {
    amounts
        .try_fold(0i64, |acc, amount| acc.checked_add(amount))
        .ok_or_else(|| overflow(what))
}

fn overflow(what: &str) -> KpiError {
    KpiError::Source(format!("{what} overflows i64 minor units"))
}
