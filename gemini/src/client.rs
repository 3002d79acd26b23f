use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    domain::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse, Schema},
    ApiKey, GeminiURL,
};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Timeout")]
    Timeout,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ApiError ({status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("EmptyResponse: {0}")]
    EmptyResponse(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("Other: {0}")]
    Other(String),
}

impl From<reqwest::Error> for GeminiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GeminiError::Timeout
        } else {
            GeminiError::ResponseError(e.to_string())
        }
    }
}

pub struct GeminiClientBuilder {
    api_key: ApiKey,
    base_url: GeminiURL,
    timeout: Duration,
}

impl GeminiClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = GeminiURL::new(base_url);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<GeminiClient, GeminiError> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| GeminiError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(GeminiClient {
            http,
            api_key: self.api_key,
            base_url: self.base_url,
        })
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: ApiKey,
    base_url: GeminiURL,
}

impl GeminiClient {
    pub fn builder(api_key: ApiKey) -> GeminiClientBuilder {
        GeminiClientBuilder {
            api_key,
            base_url: GeminiURL::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn new(api_key: ApiKey) -> Result<Self, GeminiError> {
        Self::builder(api_key).build()
    }

    #[tracing::instrument(name = "gemini_generate_content", skip(self, request))]
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = self.base_url.generate_content(model);

        let resp = self
            .http
            .post(url.as_ref())
            .header("x-goog-api-key", self.api_key.expose())
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GeminiError::Unauthorized);
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            tracing::error!("Gemini API error {}: {}", status, message);
            return Err(GeminiError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        resp.json::<GenerateContentResponse>().await.map_err(|e| {
            GeminiError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })
    }

    /// Sends `prompt` constrained to `schema` and decodes the returned JSON into `T`.
    ///
    /// Missing required fields in the model output fail the call instead of
    /// being defaulted.
    pub async fn generate_json<T: DeserializeOwned>(
        &self,
        model: &str,
        prompt: impl Into<String>,
        schema: Schema,
    ) -> Result<T, GeminiError> {
        let request = GenerateContentRequest::from_prompt(prompt).with_json_schema(schema);
        let response = self.generate_content(model, &request).await?;
        decode_structured(&response)
    }
}

/// Decodes the first candidate's text as `T`.
pub fn decode_structured<T: DeserializeOwned>(
    response: &GenerateContentResponse,
) -> Result<T, GeminiError> {
    let text = response.first_text().ok_or_else(|| {
        let reason = response
            .block_reason()
            .or_else(|| {
                response
                    .candidates
                    .first()
                    .and_then(|c| c.finish_reason.as_deref())
            })
            .unwrap_or("no candidates");
        GeminiError::EmptyResponse(reason.to_string())
    })?;

    serde_json::from_str(strip_code_fence(&text)).map_err(|e| {
        GeminiError::ParsingError(format!("Model output does not match schema: {}", e))
    })
}

// Some model versions wrap JSON output in a markdown fence even in JSON mode.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Answer {
        summary: String,
        risks: Vec<String>,
    }

    fn response_with_text(text: &str) -> GenerateContentResponse {
        serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] }, "finishReason": "STOP" }]
        }))
        .unwrap()
    }

    #[test]
    fn decodes_structured_output() {
        let response = response_with_text(r#"{"summary":"ok","risks":["rain"]}"#);
        let answer: Answer = decode_structured(&response).unwrap();
        assert_eq!(
            answer,
            Answer {
                summary: "ok".to_string(),
                risks: vec!["rain".to_string()],
            }
        );
    }

    #[test]
    fn decodes_fenced_output() {
        let response = response_with_text("```json\n{\"summary\":\"ok\",\"risks\":[]}\n```");
        let answer: Answer = decode_structured(&response).unwrap();
        assert_eq!(answer.summary, "ok");
        assert!(answer.risks.is_empty());
    }

    #[test]
    fn missing_field_is_a_parsing_error() {
        let response = response_with_text(r#"{"summary":"ok"}"#);
        let result: Result<Answer, _> = decode_structured(&response);
        assert!(matches!(result, Err(GeminiError::ParsingError(_))));
    }

    #[test]
    fn non_json_output_is_a_parsing_error() {
        let response = response_with_text("I cannot do that");
        let result: Result<Answer, _> = decode_structured(&response);
        assert!(matches!(result, Err(GeminiError::ParsingError(_))));
    }

    #[test]
    fn empty_candidates_report_the_block_reason() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }))
        .unwrap();

        match decode_structured::<Answer>(&response) {
            Err(GeminiError::EmptyResponse(reason)) => assert_eq!(reason, "SAFETY"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn builder_builds_with_custom_settings() {
        let client = GeminiClient::builder(ApiKey::new("k").unwrap())
            .base_url("http://127.0.0.1:1")
            .timeout(Duration::from_millis(50))
            .build();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_response_error() {
        let client = GeminiClient::builder(ApiKey::new("k").unwrap())
            .base_url("http://127.0.0.1:1")
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();

        let result = client
            .generate_content(DEFAULT_MODEL, &GenerateContentRequest::from_prompt("hi"))
            .await;
        assert!(matches!(
            result,
            Err(GeminiError::ResponseError(_)) | Err(GeminiError::Timeout)
        ));
    }
}
