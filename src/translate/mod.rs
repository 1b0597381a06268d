//! Translation Layer
//!
//! HTTP client for LibreTranslate-compatible endpoints. Requests are
//! retried across an explicit ordered list of mirrors; any transport
//! error, non-2xx status, or empty translation moves on to the next
//! endpoint, and a terminal error is returned only once the list is
//! exhausted.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Default LibreTranslate-compatible mirrors, tried in order
pub const DEFAULT_ENDPOINTS: &[&str] = &[
    "https://libretranslate.com/translate",
    "https://translate.astian.org/translate",
    "https://translate.argosopentech.com/translate",
];

/// Supported target languages: (code, display name)
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("hi", "Hindi"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
];

/// Translation errors
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Input was empty or whitespace-only
    #[error("no text to translate")]
    EmptyInput,

    /// No endpoints are configured
    #[error("no translation endpoints configured")]
    NoEndpoints,

    /// Every configured endpoint failed
    #[error("translation failed across {attempts} endpoint(s); last error: {last_error}")]
    AllEndpointsFailed { attempts: usize, last_error: String },
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(default, rename = "translatedText")]
    translated_text: Option<String>,
    #[serde(default)]
    translation: Option<String>,
}

impl TranslateResponse {
    /// The translated text, whichever field the endpoint used
    fn text(self) -> Option<String> {
        self.translated_text
            .or(self.translation)
            .filter(|t| !t.is_empty())
    }
}

/// Client for the translation provider chain
pub struct TranslateClient {
    http: reqwest::Client,
    endpoints: Vec<String>,
}

impl TranslateClient {
    /// Create a client using the default mirror list
    pub fn new() -> Self {
        Self::with_endpoints(DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect())
    }

    /// Create a client with an explicit ordered endpoint list
    pub fn with_endpoints(endpoints: Vec<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoints,
        }
    }

    /// Endpoints in retry order
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// Translate `text` into `target` (source language auto-detected).
    ///
    /// Tries each configured endpoint in order; the first usable
    /// translation wins.
    pub async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        if text.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }
        if self.endpoints.is_empty() {
            return Err(TranslateError::NoEndpoints);
        }

        let payload = TranslateRequest {
            q: text,
            source: "auto",
            target,
            format: "text",
        };

        let mut last_error = String::new();
        for endpoint in &self.endpoints {
            match self.try_endpoint(endpoint, &payload).await {
                Ok(translated) => {
                    debug!("translation succeeded via {}", endpoint);
                    return Ok(translated);
                }
                Err(e) => {
                    warn!("translation endpoint {} failed: {}", endpoint, e);
                    last_error = e;
                }
            }
        }

        Err(TranslateError::AllEndpointsFailed {
            attempts: self.endpoints.len(),
            last_error,
        })
    }

    /// One attempt against one endpoint. Errors are strings because each
    /// failure is only ever reported, never matched on.
    async fn try_endpoint(
        &self,
        endpoint: &str,
        payload: &TranslateRequest<'_>,
    ) -> Result<String, String> {
        let response = self
            .http
            .post(endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status.as_u16()));
        }

        let body: TranslateResponse = response.json().await.map_err(|e| e.to_string())?;
        body.text().ok_or_else(|| "empty translation".to_string())
    }
}

impl Default for TranslateClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Display name for a language code, if supported
pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_order() {
        let client = TranslateClient::new();
        assert_eq!(client.endpoints().len(), 3);
        assert!(client.endpoints()[0].starts_with("https://libretranslate.com"));
    }

    #[test]
    fn test_response_parsing_translated_text_field() {
        let body: TranslateResponse =
            serde_json::from_str(r#"{"translatedText": "hola"}"#).unwrap();
        assert_eq!(body.text().as_deref(), Some("hola"));
    }

    #[test]
    fn test_response_parsing_translation_field() {
        let body: TranslateResponse = serde_json::from_str(r#"{"translation": "hola"}"#).unwrap();
        assert_eq!(body.text().as_deref(), Some("hola"));
    }

    #[test]
    fn test_empty_translation_treated_as_missing() {
        let body: TranslateResponse =
            serde_json::from_str(r#"{"translatedText": ""}"#).unwrap();
        assert_eq!(body.text(), None);
    }

    #[test]
    fn test_request_serialization() {
        let payload = TranslateRequest {
            q: "hello",
            source: "auto",
            target: "es",
            format: "text",
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["q"], "hello");
        assert_eq!(json["source"], "auto");
        assert_eq!(json["target"], "es");
        assert_eq!(json["format"], "text");
    }

    #[tokio::test]
    async fn test_empty_input_rejected() {
        let client = TranslateClient::new();
        let err = client.translate("   ", "es").await.unwrap_err();
        assert!(matches!(err, TranslateError::EmptyInput));
    }

    #[tokio::test]
    async fn test_no_endpoints_rejected() {
        let client = TranslateClient::with_endpoints(Vec::new());
        let err = client.translate("hello", "es").await.unwrap_err();
        assert!(matches!(err, TranslateError::NoEndpoints));
    }

    #[tokio::test]
    async fn test_unreachable_endpoints_exhaust_the_chain() {
        // Nothing listens on these ports; both attempts fail fast and the
        // terminal error reports the attempt count
        let client = TranslateClient::with_endpoints(vec![
            "http://127.0.0.1:9/translate".to_string(),
            "http://127.0.0.1:10/translate".to_string(),
        ]);
        let err = client.translate("hello", "es").await.unwrap_err();
        match err {
            TranslateError::AllEndpointsFailed { attempts, .. } => assert_eq!(attempts, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_language_table() {
        assert_eq!(language_name("es"), Some("Spanish"));
        assert_eq!(language_name("zz"), None);
        assert_eq!(SUPPORTED_LANGUAGES.len(), 14);
    }
}
