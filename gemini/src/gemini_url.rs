use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiURL(String);

impl AsRef<str> for GeminiURL {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeminiURL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for GeminiURL {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl GeminiURL {
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    /// `{base}/v1beta/models/{model}:generateContent`
    pub fn generate_content(&self, model: &str) -> Self {
        let model = model.trim_start_matches("models/");
        self.append_path(&format!("/v1beta/models/{}:generateContent", model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_path_normalizes_slashes() {
        let url = GeminiURL::new("http://localhost:9000/").append_path("/v1beta/models");
        assert_eq!(url.as_ref(), "http://localhost:9000/v1beta/models");
    }

    #[test]
    fn generate_content_url() {
        let url = GeminiURL::default().generate_content("gemini-2.5-flash");
        assert_eq!(
            url.as_ref(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn generate_content_accepts_prefixed_model_names() {
        let url = GeminiURL::new("http://x").generate_content("models/gemini-2.5-pro");
        assert_eq!(url.as_ref(), "http://x/v1beta/models/gemini-2.5-pro:generateContent");
    }
}
