//! Composition root: the only place that picks concrete outbound adapters.

use std::sync::Arc;

use gemini::{ApiKey, GeminiClient, GeminiError};

use crate::{
    adapters::outbound::{GeminiReportAdapter, UnconfiguredReportGenerator},
    config::{ReportSettings, Settings},
    domain::{ports::inbound::ReportService, services::ReportServiceImpl},
    repositories::{demo_data, SiteStore},
};

pub fn site_store(settings: &Settings) -> Arc<SiteStore> {
    if settings.application.seed_demo_data {
        tracing::info!("Seeding store with demo data");
        Arc::new(SiteStore::with_data(demo_data()))
    } else {
        Arc::new(SiteStore::new())
    }
}

/// Gemini-backed report service, or one whose reports always fail with a
/// "not configured" message when no API key is available.
pub fn report_service(
    store: Arc<SiteStore>,
    settings: &ReportSettings,
) -> Result<Arc<dyn ReportService>, GeminiError> {
    let timeout = settings.timeout();

    let Some(api_key) = api_key(settings) else {
        tracing::warn!("No Gemini API key configured, health reports are disabled");
        let service = ReportServiceImpl::new(store, Arc::new(UnconfiguredReportGenerator))
            .with_timeout(timeout);
        return Ok(Arc::new(service));
    };

    let client = GeminiClient::builder(api_key)
        .base_url(&settings.base_url)
        .timeout(timeout)
        .build()?;
    let adapter = GeminiReportAdapter::new(client, &settings.model);
    tracing::info!("Health reports use model {}", settings.model);

    Ok(Arc::new(
        ReportServiceImpl::new(store, Arc::new(adapter)).with_timeout(timeout),
    ))
}

fn api_key(settings: &ReportSettings) -> Option<ApiKey> {
    settings
        .api_key
        .as_deref()
        .and_then(|key| ApiKey::new(key).ok())
        .or_else(|| ApiKey::from_env().ok())
}
