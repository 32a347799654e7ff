use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::app_config::TranslationConfig;
use crate::errors::ProviderError;
use super::{Detection, LanguageCandidate, TranslationBackend};

/// Position of the translated segments in the response array
const SEGMENTS_INDEX: usize = 0;
/// Position of the auto-detected source language
const SOURCE_LANGUAGE_INDEX: usize = 2;
/// Position of the language detection block requested with `dt=ld`
const DETECTION_INDEX: usize = 8;

/// Google Translate client for the public `translate_a/single` endpoint
#[derive(Debug)]
pub struct GoogleTranslate {
    /// Full URL of the endpoint
    endpoint: String,
    /// HTTP client for making requests
    client: Client,
}

impl GoogleTranslate {
    /// Create a new client from the translation config
    pub fn new(config: &TranslationConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .user_agent(config.user_agent.clone())
                .build()
                .unwrap_or_default(),
        }
    }

    /// Send one request and return the decoded JSON body
    async fn request(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> Result<Value, ProviderError> {
        debug!("Sending {} chars to {} ({} -> {})", text.len(), self.endpoint, source_language, target_language);

        let response = self.client.post(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source_language),
                ("tl", target_language),
                ("dt", "t"),
                ("dt", "ld"),
                ("ie", "UTF-8"),
                ("oe", "UTF-8"),
            ])
            .form(&[("q", text)])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Google Translate error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let response_text = response.text().await
            .map_err(|e| ProviderError::ParseError(format!("Failed to read response body: {}", e)))?;

        serde_json::from_str(&response_text)
            .map_err(|e| ProviderError::ParseError(format!("Response is not JSON: {}", e)))
    }
}

/// Concatenate the translated segments of a response
///
/// Blank input comes back with a `null` segment list, which reads as an
/// empty translation.
pub fn parse_translation(data: &Value) -> Result<String, ProviderError> {
    let response = data.as_array()
        .ok_or_else(|| ProviderError::ParseError("Response is not an array".to_string()))?;

    let segments = match response.get(SEGMENTS_INDEX) {
        None | Some(Value::Null) => return Ok(String::new()),
        Some(Value::Array(segments)) => segments,
        Some(other) => {
            return Err(ProviderError::ParseError(format!("Unexpected translation segments: {}", other)));
        }
    };

    // Segments without a string head carry transliterations only
    Ok(segments.iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}

/// Read the detected language(s) out of a response
///
/// The detection block looks like `[[langs...], null, [confidences...], [langs...]]`.
/// Several languages mean the service could not decide.
pub fn parse_detection(data: &Value) -> Result<Detection, ProviderError> {
    let block = data.get(DETECTION_INDEX).and_then(Value::as_array);

    if let Some(block) = block {
        let codes: Vec<&str> = block.first()
            .and_then(Value::as_array)
            .map(|langs| langs.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        let confidences: Vec<f64> = block.get(2)
            .and_then(Value::as_array)
            .map(|scores| scores.iter().filter_map(Value::as_f64).collect())
            .unwrap_or_default();

        match codes.as_slice() {
            [] => {}
            [code] => return Ok(Detection::Single(code.to_string())),
            _ => {
                let candidates = codes.iter().enumerate()
                    .map(|(i, code)| LanguageCandidate {
                        code: code.to_string(),
                        confidence: confidences.get(i).copied().unwrap_or(0.0),
                    })
                    .collect();
                return Ok(Detection::Ambiguous(candidates));
            }
        }
    }

    data.get(SOURCE_LANGUAGE_INDEX)
        .and_then(Value::as_str)
        .map(|code| Detection::Single(code.to_string()))
        .ok_or_else(|| ProviderError::ParseError("Missing detected language".to_string()))
}

#[async_trait]
impl TranslationBackend for GoogleTranslate {
    fn name(&self) -> &str {
        "Google Translate"
    }

    async fn detect(&self, text: &str) -> Result<Detection, ProviderError> {
        // Translating to English with an automatic source is how the web API reports detection
        let data = self.request(text, "en", "auto").await?;
        parse_detection(&data)
    }

    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<String, ProviderError> {
        let data = self.request(text, target_language, source_language.unwrap_or("auto")).await?;
        parse_translation(&data)
    }
}
