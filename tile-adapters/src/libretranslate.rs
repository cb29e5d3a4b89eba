//! Client for LibreTranslate-compatible HTTP translation services.
//!
//! Requests are `POST {endpoint}/translate` with a JSON body
//! `{ "q", "source", "target", "format", "api_key"? }`; a successful response
//! carries `{ "translatedText": "..." }` and failures `{ "error": "..." }`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tile_core::{Language, TranslationError, Translator};
use tracing::trace;

pub const DEFAULT_ENDPOINT: &str = "https://libretranslate.com";
const REQUEST_TIMEOUT_SECS: u64 = 15;
const CONNECT_TIMEOUT_SECS: u64 = 5;

pub struct LibreTranslateClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl LibreTranslateClient {
    pub fn new(
        endpoint: Option<&str>,
        api_key: Option<String>,
    ) -> Result<Self, TranslationError> {
        let endpoint = endpoint
            .unwrap_or(DEFAULT_ENDPOINT)
            .trim_end_matches('/')
            .to_string();
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| TranslationError::Configuration(e.to_string()))?;
        let api_key = api_key.filter(|key| !key.trim().is_empty());

        Ok(Self {
            http,
            endpoint,
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for LibreTranslateClient {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("LibreTranslateClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[async_trait]
impl Translator for LibreTranslateClient {
    async fn translate(
        &self,
        text: &str,
        target: Language,
    ) -> Result<String, TranslationError> {
        let body = TranslateRequest {
            q: text,
            source: Language::En.code(),
            target: target.code(),
            format: "text",
            api_key: self.api_key.as_deref(),
        };
        let url = format!("{}/translate", self.endpoint);
        trace!(%url, target = target.code(), "sending translation request");

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TranslationError::Request(e.to_string()))?;

        parse_response(status, &text)
    }
}

// =============================================================================
// wire types
// =============================================================================

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

fn parse_response(
    status: u16,
    body: &str,
) -> Result<String, TranslationError> {
    if status != 200 {
        let detail = serde_json::from_str::<ErrorResponse>(body)
            .map(|e| e.error)
            .unwrap_or_else(|_| body.to_string());
        return Err(TranslationError::Response(format!("HTTP {status}: {detail}")));
    }

    serde_json::from_str::<TranslateResponse>(body)
        .map(|r| r.translated_text)
        .map_err(|e| TranslationError::Response(e.to_string()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_success_body() {
        let text = parse_response(200, r#"{"translatedText":"Entrez la surface"}"#).unwrap();

        assert_eq!(text, "Entrez la surface");
    }

    #[test]
    fn parse_error_body_uses_error_field() {
        let err = parse_response(403, r#"{"error":"Invalid API key"}"#).unwrap_err();

        assert_eq!(
            err,
            TranslationError::Response("HTTP 403: Invalid API key".to_string())
        );
    }

    #[test]
    fn parse_error_body_that_is_not_json() {
        let err = parse_response(502, "Bad Gateway").unwrap_err();

        assert_eq!(
            err,
            TranslationError::Response("HTTP 502: Bad Gateway".to_string())
        );
    }

    #[test]
    fn parse_success_status_with_malformed_body() {
        assert!(matches!(
            parse_response(200, r#"{"unexpected":true}"#),
            Err(TranslationError::Response(_))
        ));
    }

    #[test]
    fn request_omits_missing_api_key() {
        let body = TranslateRequest {
            q: "Unit",
            source: "en",
            target: "es",
            format: "text",
            api_key: None,
        };

        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "q": "Unit", "source": "en", "target": "es", "format": "text" })
        );
    }

    #[test]
    fn new_trims_trailing_slash_and_blank_key() {
        let client =
            LibreTranslateClient::new(Some("http://localhost:5000/"), Some("  ".into())).unwrap();

        assert_eq!(client.endpoint(), "http://localhost:5000");
        assert!(client.api_key.is_none());
    }

    #[test]
    fn new_defaults_endpoint() {
        let client = LibreTranslateClient::new(None, None).unwrap();

        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }
}
