use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use async_trait::async_trait;
use time::OffsetDateTime;
use tracing::{error, info, info_span, Instrument};

use crate::domain::{
    models::{ProjectId, ReportState},
    ports::{
        inbound::ReportService,
        outbound::{HealthReportGenerator, ProjectSnapshotProvider},
    },
    ReportError,
};

pub const DEFAULT_REPORT_TIMEOUT: Duration = Duration::from_secs(30);

type ReportStates = Arc<Mutex<HashMap<ProjectId, ReportState>>>;

/// Implementation of the ReportService inbound port.
///
/// Keeps one [`ReportState`] per project. Generation runs in a spawned task
/// bounded by `timeout`; the outcome (report or failure) replaces whatever
/// state the project had before.
pub struct ReportServiceImpl<S, G> {
    snapshots: Arc<S>,
    generator: Arc<G>,
    states: ReportStates,
    timeout: Duration,
}

impl<S, G> ReportServiceImpl<S, G> {
    pub fn new(snapshots: Arc<S>, generator: Arc<G>) -> Self {
        Self {
            snapshots,
            generator,
            states: Arc::default(),
            timeout: DEFAULT_REPORT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn states(&self) -> MutexGuard<'_, HashMap<ProjectId, ReportState>> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl<S: ProjectSnapshotProvider, G: HealthReportGenerator> ReportService for ReportServiceImpl<S, G> {
    async fn request_report(&self, project_id: &ProjectId) -> Result<ReportState, ReportError> {
        let snapshot = self
            .snapshots
            .snapshot(project_id)
            .map_err(|_| ReportError::ProjectNotFound(project_id.clone()))?;

        let pending = ReportState::Pending {
            requested_at: OffsetDateTime::now_utc(),
        };
        {
            let mut states = self.states();
            if states.get(project_id).is_some_and(ReportState::is_pending) {
                return Err(ReportError::AlreadyPending);
            }
            states.insert(project_id.clone(), pending.clone());
        }

        let generator = Arc::clone(&self.generator);
        let states = Arc::clone(&self.states);
        let timeout = self.timeout;
        let project_id = project_id.clone();
        let span = info_span!("health_report", project_id = %project_id);

        tokio::spawn(
            async move {
                let outcome = tokio::time::timeout(timeout, generator.generate(&snapshot))
                    .await
                    .unwrap_or(Err(ReportError::Timeout));

                let state = match outcome {
                    Ok(report) => {
                        info!(risks = report.risks.len(), "health report ready");
                        ReportState::Ready {
                            report,
                            generated_at: OffsetDateTime::now_utc(),
                        }
                    }
                    Err(e) => {
                        error!(error = %e, "health report failed");
                        ReportState::Failed {
                            message: e.user_message().to_string(),
                            failed_at: OffsetDateTime::now_utc(),
                        }
                    }
                };

                states
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(project_id, state);
            }
            .instrument(span),
        );

        Ok(pending)
    }

    async fn report_state(&self, project_id: &ProjectId) -> ReportState {
        self.states()
            .get(project_id)
            .cloned()
            .unwrap_or(ReportState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::{sample_report, MockReportGenerator};
    use crate::repositories::{demo_data, SiteStore};
    use tokio::sync::Notify;

    fn service(generator: MockReportGenerator) -> ReportServiceImpl<SiteStore, MockReportGenerator> {
        ReportServiceImpl::new(Arc::new(SiteStore::with_data(demo_data())), Arc::new(generator))
    }

    async fn settled(service: &impl ReportService, project_id: &ProjectId) -> ReportState {
        for _ in 0..200 {
            let state = service.report_state(project_id).await;
            if !state.is_pending() {
                return state;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("report never settled");
    }

    #[tokio::test]
    async fn unrequested_project_is_idle() {
        let service = service(MockReportGenerator::returning(sample_report()));
        assert_eq!(service.report_state(&ProjectId::new("1")).await, ReportState::Idle);
    }

    #[tokio::test]
    async fn successful_report_becomes_ready() {
        let generator = MockReportGenerator::returning(sample_report());
        let service = service(generator.clone());
        let id = ProjectId::new("1");

        let state = service.request_report(&id).await.unwrap();
        assert!(state.is_pending());

        let state = settled(&service, &id).await;
        assert_eq!(state.report(), Some(&sample_report()));
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn failure_replaces_previous_report() {
        let generator = MockReportGenerator::with_sequence(vec![Some(sample_report()), None]);
        let service = service(generator);
        let id = ProjectId::new("1");

        service.request_report(&id).await.unwrap();
        assert!(settled(&service, &id).await.report().is_some());

        service.request_report(&id).await.unwrap();
        let state = settled(&service, &id).await;
        assert!(state.report().is_none());
        assert!(matches!(state, ReportState::Failed { .. }));
    }

    #[tokio::test]
    async fn second_request_while_pending_is_rejected() {
        let gate = Arc::new(Notify::new());
        let generator = MockReportGenerator::returning(sample_report()).with_gate(gate.clone());
        let service = service(generator.clone());
        let id = ProjectId::new("1");

        service.request_report(&id).await.unwrap();
        let second = service.request_report(&id).await;
        assert!(matches!(second, Err(ReportError::AlreadyPending)));

        gate.notify_one();
        assert!(settled(&service, &id).await.report().is_some());
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn other_projects_are_not_blocked() {
        let gate = Arc::new(Notify::new());
        let generator = MockReportGenerator::returning(sample_report()).with_gate(gate.clone());
        let service = service(generator);

        service.request_report(&ProjectId::new("1")).await.unwrap();
        assert!(service.request_report(&ProjectId::new("2")).await.is_ok());
    }

    #[tokio::test]
    async fn slow_generator_times_out() {
        let generator = MockReportGenerator::returning(sample_report()).with_delay(Duration::from_secs(5));
        let service = service(generator).with_timeout(Duration::from_millis(20));
        let id = ProjectId::new("1");

        service.request_report(&id).await.unwrap();
        match settled(&service, &id).await {
            ReportState::Failed { message, .. } => {
                assert_eq!(message, ReportError::Timeout.user_message())
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_project_is_rejected_without_calling_generator() {
        let generator = MockReportGenerator::returning(sample_report());
        let service = service(generator.clone());

        let result = service.request_report(&ProjectId::new("404")).await;
        assert!(matches!(result, Err(ReportError::ProjectNotFound(_))));
        assert_eq!(generator.call_count(), 0);
    }
}
