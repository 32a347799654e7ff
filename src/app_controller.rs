use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::language_utils::{validate_language, LanguageCatalog};
use crate::providers::TranslationBackend;
use crate::subtitle_processor::SubtitleDocument;
use crate::translation::{BatchTranslator, LanguageChooser, LanguageDetector};

// @module: Application controller for subtitle translation

/// Main application controller for subtitle translation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Configuration the controller runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Translate `input_file` and write the result next to it
    ///
    /// Language codes, file extension and chunk size are all checked before
    /// the file is opened or the backend is called. Nothing is written when
    /// any step fails.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path of the translated file
    pub async fn run(
        &self,
        input_file: &Path,
        catalog: &dyn LanguageCatalog,
        backend: &dyn TranslationBackend,
        chooser: &mut dyn LanguageChooser,
    ) -> Result<PathBuf> {
        let start_time = std::time::Instant::now();

        let target_language = self.config.target_language.as_deref()
            .ok_or_else(|| AppError::Config("a destination language is required".to_string()))?;
        let target_language = validate_language(catalog, target_language, "Destination")?;
        let source_language = self.config.source_language.as_deref()
            .map(|code| validate_language(catalog, code, "Source"))
            .transpose()?;

        FileManager::ensure_subtitle_extension(input_file)?;
        if self.config.chunk_size == 0 {
            return Err(AppError::Config("Chunk size must be a positive number of lines".to_string()).into());
        }

        let output_path = FileManager::derive_output_path(input_file, &target_language);

        info!("Reading {}...", input_file.display());
        let document = FileManager::read_document(input_file, self.config.invalid_utf8)?;

        let source_language = match source_language {
            Some(code) => code,
            None => {
                info!("Detecting source language...");
                LanguageDetector::new(backend, catalog)
                    .detect_source_language(&document.lines, chooser)
                    .await
                    .context("Could not determine the source language, pass it with --src")?
            }
        };

        info!("Translating from {} to {} with {}...", source_language, target_language, backend.name());
        let translated_lines = self
            .translate_with_progress(&document.lines, &source_language, &target_language, backend)
            .await
            .with_context(|| format!("Translation of {} failed", input_file.display()))?;

        let translated = SubtitleDocument::from_lines(&output_path, translated_lines);
        info!("Writing {}...", translated);
        FileManager::write_document(&output_path, &translated)?;

        info!(
            "Translation completed in {}.",
            Self::format_duration(start_time.elapsed())
        );

        Ok(output_path)
    }

    /// Translate all lines while driving a progress bar
    async fn translate_with_progress(
        &self,
        lines: &[String],
        source_language: &str,
        target_language: &str,
        backend: &dyn TranslationBackend,
    ) -> Result<Vec<String>, AppError> {
        let total_lines = lines.len() as u64;

        // Create a progress bar for translation tracking
        let progress_bar = ProgressBar::new(total_lines);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message("Translating");

        let pb = progress_bar.clone();
        let result = BatchTranslator::new(backend)
            .translate_lines(
                lines,
                Some(source_language),
                target_language,
                self.config.chunk_size,
                move |chunk_start, _total| pb.set_position(chunk_start as u64),
            )
            .await;

        match &result {
            Ok(_) => {
                progress_bar.set_position(total_lines);
                progress_bar.finish_with_message("Done!");
            }
            Err(_) => progress_bar.abandon_with_message("Failed"),
        }

        result
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
