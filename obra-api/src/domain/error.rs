use thiserror::Error;

use super::models::ProjectId;
use super::validation::ValidationError;

/// Errors returned by the site store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Errors that can occur while generating a project health report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report generation is not configured")]
    NotConfigured,
    #[error("a report is already being generated for this project")]
    AlreadyPending,
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
    #[error("report provider rejected the credentials")]
    Unauthorized,
    #[error("report provider did not answer in time")]
    Timeout,
    #[error("report provider error: {0}")]
    Upstream(String),
    #[error("malformed report: {0}")]
    Malformed(String),
}

impl ReportError {
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Text shown on the dashboard; details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            ReportError::NotConfigured => {
                "A análise por IA não está configurada. Defina a chave da API para habilitá-la."
            }
            ReportError::AlreadyPending => "Uma análise já está em andamento para esta obra.",
            ReportError::ProjectNotFound(_) => "Obra não encontrada.",
            ReportError::Unauthorized => {
                "A chave da API de IA foi recusada. Verifique a configuração."
            }
            ReportError::Timeout => "A análise demorou demais para responder. Tente novamente.",
            ReportError::Upstream(_) | ReportError::Malformed(_) => {
                "Falha ao analisar o projeto com IA. Tente novamente mais tarde."
            }
        }
    }
}
