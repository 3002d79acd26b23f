mod prompt;

pub use prompt::{health_prompt, health_report_schema};

use async_trait::async_trait;
use gemini::{GeminiClient, GeminiError};
use tracing::{debug, instrument};

use crate::domain::{
    models::{HealthReport, ProjectSnapshot},
    ports::outbound::HealthReportGenerator,
    ReportError,
};

/// Adapter that wraps the Gemini client to implement the HealthReportGenerator port.
pub struct GeminiReportAdapter {
    client: GeminiClient,
    model: String,
}

impl GeminiReportAdapter {
    pub fn new(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl HealthReportGenerator for GeminiReportAdapter {
    #[instrument(skip_all, fields(project_id = %snapshot.project.id, model = %self.model))]
    async fn generate(&self, snapshot: &ProjectSnapshot) -> Result<HealthReport, ReportError> {
        let prompt = health_prompt(snapshot);
        debug!(
            expenses = snapshot.expenses.len(),
            materials = snapshot.materials.len(),
            "requesting health report"
        );

        self.client
            .generate_json::<HealthReport>(&self.model, prompt, health_report_schema())
            .await
            .map_err(map_gemini_error)
    }
}

fn map_gemini_error(e: GeminiError) -> ReportError {
    match e {
        GeminiError::Unauthorized => ReportError::Unauthorized,
        GeminiError::Timeout => ReportError::Timeout,
        GeminiError::EmptyResponse(msg) | GeminiError::ParsingError(msg) => {
            ReportError::malformed(msg)
        }
        GeminiError::ApiError { status, message } => {
            ReportError::upstream(format!("{status}: {message}"))
        }
        GeminiError::ResponseError(msg) | GeminiError::Other(msg) => ReportError::upstream(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_client_errors() {
        assert!(matches!(
            map_gemini_error(GeminiError::Unauthorized),
            ReportError::Unauthorized
        ));
        assert!(matches!(
            map_gemini_error(GeminiError::ParsingError("missing field `risks`".into())),
            ReportError::Malformed(_)
        ));
        assert!(matches!(
            map_gemini_error(GeminiError::ApiError {
                status: 429,
                message: "quota".into()
            }),
            ReportError::Upstream(msg) if msg == "429: quota"
        ));
    }
}
