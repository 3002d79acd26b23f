use std::env;
use std::fmt;

use thiserror::Error;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// API key sent in the `x-goog-api-key` header.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiKeyError {
    #[error("Missing API key ({0} is not set)")]
    Missing(&'static str),
    #[error("API key is empty")]
    Empty,
}

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self, ApiKeyError> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(ApiKeyError::Empty);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Reads the key from `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self, ApiKeyError> {
        let key = env::var(API_KEY_ENV).map_err(|_| ApiKeyError::Missing(API_KEY_ENV))?;
        Self::new(key)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

// Never print the key itself.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}
