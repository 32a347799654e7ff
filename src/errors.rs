/*!
 * Error types for the srt-translator application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to a translation backend
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Rejected answer while picking one of several detected languages.
///
/// Never leaves the prompt loop: the user is asked again.
#[derive(Error, Debug, PartialEq)]
pub enum SelectionError {
    #[error("Invalid language code: '{0}'")]
    UnknownCode(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid language code, wrong file extension, bad chunk size or config file
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file missing, unreadable or undecodable; prompt input closed
    #[error("Input error: {0}")]
    Input(String),

    /// Error from the translation backend
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Source language could not be determined
    #[error("Language detection failed: {0}")]
    Detection(String),
}

impl AppError {
    /// True for errors raised by option or argument validation
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Input(error.to_string())
    }
}
