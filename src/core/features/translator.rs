//! Translation adapter
//!
//! Wraps a remote translation call for a fixed source/target language
//! pair. Uses the unofficial Google Translate endpoint (free tier).
//! For production, consider the official Google Cloud Translation API.

use crate::shared::error::{AppError, AppResult};
use async_trait::async_trait;

pub mod types;
pub mod view_model;

use super::TranslationProvider;
use types::{TranslationRequest, TranslationResponse};

const GTX_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

pub struct GoogleTranslator {
    client: reqwest::Client,
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslator {
    async fn translate(&self, request: TranslationRequest) -> AppResult<TranslationResponse> {
        let url = format!(
            "{}?client=gtx&sl={}&tl={}&dt=t&q={}",
            GTX_ENDPOINT,
            request.direction.source_code(),
            request.direction.target_code(),
            urlencoding::encode(&request.text)
        );

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "Mozilla/5.0")
            .send()
            .await?;

        if !response.status().is_success() {
            eprintln!("[Translator] API returned error: {}", response.status());
            return Err(AppError::Service(format!(
                "Translation API error: {}",
                response.status()
            )));
        }

        let json = response.json::<serde_json::Value>().await?;
        let translated = extract_translation(&json)?;

        Ok(TranslationResponse { translated })
    }
}

/// Pull the translated text out of the gtx payload.
///
/// The endpoint answers with nested arrays shaped like
/// `[[["hola","hello",...],...],...]`; the first element of each inner
/// array is one translated segment.
fn extract_translation(json: &serde_json::Value) -> AppResult<String> {
    let mut translated = String::new();

    if let Some(segments) = json.get(0).and_then(|v| v.as_array()) {
        for segment in segments {
            if let Some(text) = segment.get(0).and_then(|v| v.as_str()) {
                translated.push_str(text);
            }
        }
    }

    if translated.is_empty() {
        return Err(AppError::Service(
            "Translation API returned an empty translation".to_string(),
        ));
    }

    Ok(translated)
}

#[cfg(test)]
mod tests {
    use super::types::Direction;
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_single_segment() {
        let payload = json!([[["hola", "hello", null, null, 10]], null, "en"]);
        assert_eq!(extract_translation(&payload).unwrap(), "hola");
    }

    #[test]
    fn concatenates_multiple_segments() {
        let payload = json!([
            [
                ["hola. ", "hello. ", null, null, 10],
                ["adiós", "goodbye", null, null, 10]
            ],
            null,
            "en"
        ]);
        assert_eq!(extract_translation(&payload).unwrap(), "hola. adiós");
    }

    #[test]
    fn empty_payload_is_a_service_error() {
        let payload = json!([[], null, "en"]);
        let err = extract_translation(&payload).unwrap_err();
        assert!(matches!(err, AppError::Service(_)));
    }

    #[test]
    fn non_array_payload_is_a_service_error() {
        let payload = json!({"unexpected": "shape"});
        assert!(extract_translation(&payload).is_err());
    }

    #[tokio::test]
    #[ignore] // Hits the live endpoint, run manually: cargo test live_ -- --ignored
    async fn live_hello_translates_to_hola() {
        let provider = GoogleTranslator::new();
        let response = provider
            .translate(TranslationRequest {
                text: "hello".to_string(),
                direction: Direction::EnglishToSpanish,
            })
            .await
            .expect("live translation failed");
        assert_eq!(response.translated.to_lowercase(), "hola");
    }
}
