/*!
 * Batch translation processing.
 *
 * This module splits a document's lines into fixed-size chunks and sends
 * them one after another to the translation backend.
 */

use log::{debug, warn};

use crate::errors::AppError;
use crate::providers::TranslationBackend;

/// Split `lines` into consecutive chunks of `size` lines
///
/// Every chunk but the last holds exactly `size` lines. Concatenating the
/// chunks in order gives back `lines`.
pub fn chunk_lines(lines: &[String], size: usize) -> Result<Vec<&[String]>, AppError> {
    if size == 0 {
        return Err(AppError::Config("Chunk size must be a positive number of lines".to_string()));
    }
    Ok(lines.chunks(size).collect())
}

/// Batch translator for processing document lines chunk by chunk
pub struct BatchTranslator<'a> {
    /// The backend to send chunks to
    backend: &'a dyn TranslationBackend,
}

impl<'a> BatchTranslator<'a> {
    /// Create a new batch translator
    pub fn new(backend: &'a dyn TranslationBackend) -> Self {
        Self { backend }
    }

    /// Translate lines in chunks of `chunk_size`
    ///
    /// `progress_callback` receives the start index of each chunk once it is
    /// done, and the total number of lines.
    ///
    /// A chunk may come back with more or fewer lines than were sent, since
    /// the service is free to merge or split sentences. The reply is kept as
    /// is; every later line shifts with it.
    pub async fn translate_lines(
        &self,
        lines: &[String],
        source_language: Option<&str>,
        target_language: &str,
        chunk_size: usize,
        mut progress_callback: impl FnMut(usize, usize),
    ) -> Result<Vec<String>, AppError> {
        let chunks = chunk_lines(lines, chunk_size)?;
        let total_lines = lines.len();
        let mut translated_lines = Vec::with_capacity(total_lines);

        for (chunk_index, chunk) in chunks.iter().enumerate() {
            let start = chunk_index * chunk_size;
            debug!("Translating chunk {} of {} (lines {}..{})", chunk_index + 1, chunks.len(), start, start + chunk.len());

            let translated = self.backend
                .translate(&chunk.join("\n"), target_language, source_language)
                .await?;

            let before = translated_lines.len();
            translated_lines.extend(translated.split('\n').map(str::to_string));
            let received = translated_lines.len() - before;

            if received != chunk.len() {
                warn!(
                    "Chunk {} came back with {} lines instead of {}, subtitle lines after line {} may be misaligned",
                    chunk_index + 1,
                    received,
                    chunk.len(),
                    start
                );
            }

            progress_callback(start, total_lines);
        }

        Ok(translated_lines)
    }
}
