/*!
 * Common test utilities for the srt-translator test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

use anyhow::Result;
use tempfile::TempDir;

use srt_translator::errors::AppError;
use srt_translator::language_utils::{GoogleLanguageCatalog, LanguageCatalog};
use srt_translator::providers::LanguageCandidate;
use srt_translator::translation::LanguageChooser;

static LOGGER: Once = Once::new();

/// Route library log output to the test harness
pub fn init_test_logging() {
    LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Sample subtitle content with three entries
pub const SAMPLE_SUBTITLE: &str = "1
00:00:01,000 --> 00:00:04,000
This is a test subtitle.

2
00:00:05,000 --> 00:00:09,000
It contains multiple entries.

3
00:00:10,000 --> 00:00:14,000
For testing purposes.
";

/// Creates a sample subtitle file for testing
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_SUBTITLE)
}

/// Turn string literals into owned lines
pub fn to_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

/// Catalog wrapper counting every lookup
#[derive(Debug, Default)]
pub struct RecordingCatalog {
    inner: GoogleLanguageCatalog,
    lookups: AtomicUsize,
}

impl RecordingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl LanguageCatalog for RecordingCatalog {
    fn is_valid(&self, code: &str) -> bool {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.is_valid(code)
    }

    fn list_all(&self) -> Vec<(String, String)> {
        self.inner.list_all()
    }
}

/// Chooser returning scripted answers without any console
#[derive(Debug, Default)]
pub struct ScriptedChooser {
    answers: Vec<String>,
    /// Candidate lists received, in call order
    pub offered: Vec<Vec<LanguageCandidate>>,
}

impl ScriptedChooser {
    pub fn answering(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().rev().map(|answer| answer.to_string()).collect(),
            offered: Vec::new(),
        }
    }

    /// Chooser with no answers, every call is an error
    pub fn unused() -> Self {
        Self::default()
    }
}

impl LanguageChooser for ScriptedChooser {
    fn choose(&mut self, candidates: &[LanguageCandidate]) -> Result<String, AppError> {
        self.offered.push(candidates.to_vec());
        self.answers
            .pop()
            .ok_or_else(|| AppError::Input("No scripted answer left".to_string()))
    }
}
