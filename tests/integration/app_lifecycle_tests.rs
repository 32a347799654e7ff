/*!
 * Integration tests for argument validation in the controller
 *
 * Every check here must fire before the input file is opened and before
 * the backend is called.
 */

use std::path::Path;
use anyhow::Result;

use srt_translator::app_config::Config;
use srt_translator::app_controller::Controller;
use srt_translator::errors::AppError;
use srt_translator::language_utils::GoogleLanguageCatalog;
use srt_translator::providers::mock::MockBackend;
use crate::common::{self, RecordingCatalog, ScriptedChooser};

fn config_for(source: Option<&str>, target: Option<&str>, chunk_size: usize) -> Config {
    Config {
        source_language: source.map(str::to_string),
        target_language: target.map(str::to_string),
        chunk_size,
        ..Config::default()
    }
}

fn assert_config_error(err: &anyhow::Error) {
    match err.downcast_ref::<AppError>() {
        Some(app_error) => assert!(app_error.is_config(), "Expected config error, got {}", app_error),
        None => panic!("Expected AppError, got {:#}", err),
    }
}

/// Test that an invalid destination fails without touching file or backend
#[tokio::test]
async fn test_run_withInvalidDestination_shouldFailBeforeAnyCall() {
    let backend = MockBackend::uppercase();
    let catalog = RecordingCatalog::new();
    let mut chooser = ScriptedChooser::unused();

    let err = Controller::with_config(config_for(Some("en"), Some("xx"), 200))
        .run(Path::new("nonexistent.srt"), &catalog, &backend, &mut chooser)
        .await
        .unwrap_err();

    assert_config_error(&err);
    assert!(err.to_string().contains("'xx'"));
    assert_eq!(catalog.lookups(), 1);
    assert_eq!(backend.detect_calls(), 0);
    assert_eq!(backend.translate_calls(), 0);
}

/// Test that an invalid source fails without touching file or backend
#[tokio::test]
async fn test_run_withInvalidSource_shouldFailBeforeAnyCall() {
    let backend = MockBackend::uppercase();
    let mut chooser = ScriptedChooser::unused();

    let err = Controller::with_config(config_for(Some("klingon"), Some("fr"), 200))
        .run(Path::new("nonexistent.srt"), &GoogleLanguageCatalog, &backend, &mut chooser)
        .await
        .unwrap_err();

    assert_config_error(&err);
    assert_eq!(backend.detect_calls(), 0);
    assert_eq!(backend.translate_calls(), 0);
}

/// Test that a missing destination is a configuration error
#[tokio::test]
async fn test_run_withoutDestination_shouldFailWithConfigError() {
    let backend = MockBackend::uppercase();
    let mut chooser = ScriptedChooser::unused();

    let err = Controller::with_config(config_for(Some("en"), None, 200))
        .run(Path::new("movie.srt"), &GoogleLanguageCatalog, &backend, &mut chooser)
        .await
        .unwrap_err();

    assert_config_error(&err);
}

/// Test that a file that is not .srt fails before reading or any network call
#[tokio::test]
async fn test_run_withWrongExtension_shouldFailBeforeReading() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "notes.txt", "hello")?;
    let backend = MockBackend::uppercase();
    let mut chooser = ScriptedChooser::unused();

    let err = Controller::with_config(config_for(None, Some("fr"), 200))
        .run(&input, &GoogleLanguageCatalog, &backend, &mut chooser)
        .await
        .unwrap_err();

    assert_config_error(&err);
    assert_eq!(backend.detect_calls(), 0);
    assert_eq!(backend.translate_calls(), 0);
    assert!(!temp_dir.path().join("notes_fr.txt").exists());
    Ok(())
}

/// Test that a zero chunk size is refused before reading
#[tokio::test]
async fn test_run_withZeroChunkSize_shouldFailWithConfigError() {
    let backend = MockBackend::uppercase();
    let mut chooser = ScriptedChooser::unused();

    let err = Controller::with_config(config_for(Some("en"), Some("fr"), 0))
        .run(Path::new("nonexistent.srt"), &GoogleLanguageCatalog, &backend, &mut chooser)
        .await
        .unwrap_err();

    assert_config_error(&err);
    assert_eq!(backend.translate_calls(), 0);
}

/// Test that a missing input file is an input error once arguments are valid
#[tokio::test]
async fn test_run_withMissingFile_shouldFailWithInputError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let backend = MockBackend::uppercase();
    let mut chooser = ScriptedChooser::unused();

    let err = Controller::with_config(config_for(Some("en"), Some("fr"), 200))
        .run(&temp_dir.path().join("missing.srt"), &GoogleLanguageCatalog, &backend, &mut chooser)
        .await
        .unwrap_err();

    assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::Input(_))));
    assert_eq!(backend.translate_calls(), 0);
    Ok(())
}

/// Test that a file without captions fails detection without translating
#[tokio::test]
async fn test_run_withoutCaptionsAndNoSource_shouldFailWithDetectionError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "blank.srt", "1\n00:00:01,000 --> 00:00:02,000\n\n")?;
    let backend = MockBackend::uppercase();
    let mut chooser = ScriptedChooser::unused();

    let err = Controller::with_config(config_for(None, Some("fr"), 200))
        .run(&input, &GoogleLanguageCatalog, &backend, &mut chooser)
        .await
        .unwrap_err();

    assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::Detection(_))));
    assert!(format!("{:#}", err).contains("--src"));
    assert_eq!(backend.detect_calls(), 0);
    assert_eq!(backend.translate_calls(), 0);
    assert!(!temp_dir.path().join("blank_fr.srt").exists());
    Ok(())
}

/// Test that the controller keeps the configuration it was given
#[test]
fn test_with_config_shouldExposeConfig() {
    let controller = Controller::with_config(config_for(Some("en"), Some("fr"), 25));
    assert_eq!(controller.config().chunk_size, 25);
    assert_eq!(controller.config().target_language.as_deref(), Some("fr"));
}
