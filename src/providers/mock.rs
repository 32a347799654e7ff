/*!
 * Mock backend implementation for testing.
 *
 * This module provides a mock backend that simulates different behaviors:
 * - `MockBackend::uppercase()` - Always succeeds, "translates" by uppercasing
 * - `MockBackend::merging()` - Collapses every chunk into a single line
 * - `MockBackend::failing_after(n)` - Succeeds n times, then fails
 * - `MockBackend::failing()` - Always fails with an error
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use super::{Detection, TranslationBackend};

/// A translate call seen by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct MockRequest {
    /// The text to translate
    pub text: String,
    /// Source language, `None` when left to the service
    pub source_language: Option<String>,
    /// Target language
    pub target_language: String,
}

/// Behavior mode for the mock backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Returns the text uppercased
    Uppercase,
    /// Returns the text unchanged
    Echo,
    /// Joins all lines of the text with a space, shrinking the line count
    MergeLines,
    /// Fails once `succeed` translate calls have gone through
    FailAfter { succeed: usize },
    /// Always fails with an error
    Failing,
}

/// Mock backend for testing translation behavior
#[derive(Debug)]
pub struct MockBackend {
    /// Behavior mode
    behavior: MockBehavior,
    /// Answer to every detect call
    detection: Detection,
    /// Counter of detect calls
    detect_count: Arc<AtomicUsize>,
    /// Translate calls received so far
    requests: Arc<Mutex<Vec<MockRequest>>>,
}

impl MockBackend {
    /// Create a new mock backend with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            detection: Detection::Single("en".to_string()),
            detect_count: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock backend that uppercases every request
    pub fn uppercase() -> Self {
        Self::new(MockBehavior::Uppercase)
    }

    /// Create a mock backend that returns its input
    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    /// Create a mock backend that merges the lines of each chunk
    pub fn merging() -> Self {
        Self::new(MockBehavior::MergeLines)
    }

    /// Create a mock backend that fails after `succeed` translations
    pub fn failing_after(succeed: usize) -> Self {
        Self::new(MockBehavior::FailAfter { succeed })
    }

    /// Create a failing mock backend that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Set the answer returned by `detect`
    pub fn with_detection(mut self, detection: Detection) -> Self {
        self.detection = detection;
        self
    }

    /// Number of detect calls made so far
    pub fn detect_calls(&self) -> usize {
        self.detect_count.load(Ordering::SeqCst)
    }

    /// Number of translate calls made so far
    pub fn translate_calls(&self) -> usize {
        self.requests.lock().map(|requests| requests.len()).unwrap_or(0)
    }

    /// Copy of every translate call made so far
    pub fn requests(&self) -> Vec<MockRequest> {
        self.requests.lock().map(|requests| requests.clone()).unwrap_or_default()
    }
}

impl Clone for MockBackend {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            detection: self.detection.clone(),
            detect_count: Arc::clone(&self.detect_count),
            requests: Arc::clone(&self.requests),
        }
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn detect(&self, _text: &str) -> Result<Detection, ProviderError> {
        self.detect_count.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError("Simulated detection failure".to_string())),
            _ => Ok(self.detection.clone()),
        }
    }

    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<String, ProviderError> {
        let count = {
            let mut requests = self.requests.lock()
                .map_err(|_| ProviderError::RequestFailed("Mock request log poisoned".to_string()))?;
            requests.push(MockRequest {
                text: text.to_string(),
                source_language: source_language.map(str::to_string),
                target_language: target_language.to_string(),
            });
            requests.len()
        };

        match self.behavior {
            MockBehavior::Uppercase => Ok(text.to_uppercase()),
            MockBehavior::Echo => Ok(text.to_string()),
            MockBehavior::MergeLines => Ok(text.split('\n').collect::<Vec<_>>().join(" ")),
            MockBehavior::FailAfter { succeed } if count > succeed => Err(ProviderError::ApiError {
                message: format!("Simulated failure (request #{})", count),
                status_code: 503,
            }),
            MockBehavior::FailAfter { .. } => Ok(text.to_string()),
            MockBehavior::Failing => Err(ProviderError::ApiError {
                message: "Simulated backend failure".to_string(),
                status_code: 500,
            }),
        }
    }
}
