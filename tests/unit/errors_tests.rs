/*!
 * Tests for error types
 */

use srt_translator::errors::{AppError, ProviderError, SelectionError};

/// Test that provider errors convert into app errors
#[test]
fn test_provider_error_conversion_shouldWrapInAppError() {
    let provider_error = ProviderError::ApiError {
        status_code: 429,
        message: "Too many requests".to_string(),
    };

    let app_error: AppError = provider_error.into();

    assert!(matches!(app_error, AppError::Provider(ProviderError::ApiError { status_code: 429, .. })));
    assert_eq!(
        app_error.to_string(),
        "Provider error: API responded with error: 429 - Too many requests"
    );
}

/// Test that io errors become input errors
#[test]
fn test_io_error_conversion_shouldBecomeInputError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");

    let app_error: AppError = io_error.into();

    assert!(matches!(app_error, AppError::Input(_)));
    assert!(!app_error.is_config());
}

/// Test error display formats
#[test]
fn test_error_display_shouldIncludeKind() {
    assert_eq!(
        AppError::Config("bad chunk".to_string()).to_string(),
        "Configuration error: bad chunk"
    );
    assert_eq!(
        AppError::Detection("nothing to detect".to_string()).to_string(),
        "Language detection failed: nothing to detect"
    );
    assert_eq!(
        ProviderError::ConnectionError("timed out".to_string()).to_string(),
        "Connection error: timed out"
    );
    assert_eq!(
        SelectionError::UnknownCode("xx".to_string()).to_string(),
        "Invalid language code: 'xx'"
    );
}

/// Test that app errors survive a trip through anyhow
#[test]
fn test_app_error_inAnyhow_shouldDowncast() {
    let err: anyhow::Error = AppError::Config("bad".to_string()).into();
    let err = err.context("Run failed");

    let app_error = err.downcast_ref::<AppError>();

    assert!(app_error.is_some_and(AppError::is_config));
}
