//! Mock report generator for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::{
    models::{HealthReport, ProjectSnapshot},
    ports::outbound::HealthReportGenerator,
    ReportError,
};

pub fn sample_report() -> HealthReport {
    HealthReport {
        summary: "Obra dentro do prazo, com custos de material acima do previsto.".to_string(),
        risks: vec![
            "Estouro no orçamento de concreto".to_string(),
            "Estoque baixo de porcelanato".to_string(),
            "Chuvas atrasando a alvenaria".to_string(),
        ],
        recommendations: vec![
            "Renegociar contrato de concreto usinado".to_string(),
            "Antecipar compra de acabamentos".to_string(),
            "Replanejar atividades externas".to_string(),
        ],
        savings_potential: "Reduzir perdas de blocos no transporte.".to_string(),
    }
}

/// Mock generator answering from a fixed sequence.
///
/// `Some(report)` succeeds, `None` fails with an upstream error. Wraps around
/// when called more often than the sequence is long.
#[derive(Clone)]
pub struct MockReportGenerator {
    responses: Arc<Vec<Option<HealthReport>>>,
    call_count: Arc<AtomicUsize>,
    gate: Option<Arc<Notify>>,
    delay: Duration,
}

impl MockReportGenerator {
    pub fn returning(report: HealthReport) -> Self {
        Self::with_sequence(vec![Some(report)])
    }

    pub fn failing() -> Self {
        Self::with_sequence(vec![None])
    }

    pub fn with_sequence(responses: Vec<Option<HealthReport>>) -> Self {
        Self {
            responses: Arc::new(responses),
            call_count: Arc::new(AtomicUsize::new(0)),
            gate: None,
            delay: Duration::ZERO,
        }
    }

    /// Holds every answer until `gate` is notified.
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HealthReportGenerator for MockReportGenerator {
    async fn generate(&self, _snapshot: &ProjectSnapshot) -> Result<HealthReport, ReportError> {
        let idx = self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match self.responses.get(idx % self.responses.len().max(1)) {
            Some(Some(report)) => Ok(report.clone()),
            _ => Err(ReportError::upstream("mock failure")),
        }
    }
}
