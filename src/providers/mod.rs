/*!
 * Backend implementations for the remote translation service.
 *
 * This module contains client implementations behind a common trait:
 * - Google: the public Google Translate web endpoint
 * - Mock: deterministic in-process backend for tests and benchmarks
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// One possible source language with the service's confidence in it
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageCandidate {
    /// Language code as reported by the service
    pub code: String,
    /// Confidence score, 0.0 to 1.0
    pub confidence: f64,
}

/// Outcome of a language detection request
#[derive(Debug, Clone, PartialEq)]
pub enum Detection {
    /// The service settled on one language
    Single(String),
    /// The service could not decide between several languages
    Ambiguous(Vec<LanguageCandidate>),
}

/// Common trait for all translation backends
///
/// This trait defines the interface that all backend implementations must follow,
/// allowing them to be used interchangeably by the translation driver.
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Short name used in log lines
    fn name(&self) -> &str;

    /// Classify the language of `text`
    ///
    /// # Arguments
    /// * `text` - Sample text to classify
    ///
    /// # Returns
    /// * `Result<Detection, ProviderError>` - The detected language(s) or an error
    async fn detect(&self, text: &str) -> Result<Detection, ProviderError>;

    /// Translate `text` into `target_language`
    ///
    /// # Arguments
    /// * `text` - Text to translate, may span several lines
    /// * `target_language` - Destination language code
    /// * `source_language` - Source language code, `None` lets the service guess
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<String, ProviderError>;
}

pub mod google;
pub mod mock;
