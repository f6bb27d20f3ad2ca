//! Service wiring for the HTTP layer.

use std::sync::Arc;

use printerp_kpi::{DefaultKpiController, InMemoryKpiStore, KpiController};

/// Collaborators the routes delegate to.
#[derive(Clone)]
pub struct AppServices {
    pub kpis: Arc<dyn KpiController>,
}

impl AppServices {
    pub fn new(kpis: Arc<dyn KpiController>) -> Self {
        Self { kpis }
    }

    /// In-memory wiring (dev/test). The store handle is returned so callers can
    /// load rows into it.
    pub fn in_memory() -> (Self, Arc<InMemoryKpiStore>) {
        let store = Arc::new(InMemoryKpiStore::new());
        let controller = DefaultKpiController::new(Arc::clone(&store));
        (Self::new(Arc::new(controller)), store)
    }
}
