use std::sync::Arc;

use crate::{
    domain::ports::inbound::ReportService,
    repositories::SiteStore,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SiteStore>,
    pub reports: Arc<dyn ReportService>,
}

impl AppState {
    pub fn new(store: Arc<SiteStore>, reports: Arc<dyn ReportService>) -> Self {
        Self { store, reports }
    }
}
