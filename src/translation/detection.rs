/*!
 * Source language detection.
 *
 * The first caption line of the document is sent to the backend for
 * classification. When the backend hesitates between several languages the
 * user picks one of them.
 */

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::errors::{AppError, SelectionError};
use crate::language_utils::{normalize_language_code, LanguageCatalog};
use crate::providers::{Detection, LanguageCandidate, TranslationBackend};
use crate::subtitle_processor::is_content_line;

/// Pick the line that represents the document's language
///
/// Returns the first line that is not empty, not a subtitle index and not a
/// timing line, trimmed. `None` when the document has no such line.
pub fn select_detection_sample(lines: &[String]) -> Option<&str> {
    lines.iter()
        .map(String::as_str)
        .find(|line| is_content_line(line))
        .map(str::trim)
}

/// Check one answer against the candidate list
///
/// Answer and candidate codes are compared in normalized form, and the
/// normalized code is returned.
pub fn match_candidate(candidates: &[LanguageCandidate], answer: &str) -> Result<String, SelectionError> {
    let answer = normalize_language_code(answer);
    if answer.is_empty() {
        return Err(SelectionError::UnknownCode(answer));
    }

    candidates.iter()
        .map(|candidate| normalize_language_code(&candidate.code))
        .find(|code| *code == answer)
        .ok_or(SelectionError::UnknownCode(answer))
}

/// Ask the user to pick one of `candidates`
///
/// Prints every candidate with its confidence, then reads answers from
/// `input` until one matches a candidate code. Running out of input is an
/// error rather than an endless loop.
pub fn choose_candidate<R: BufRead + ?Sized, W: Write + ?Sized>(
    candidates: &[LanguageCandidate],
    input: &mut R,
    output: &mut W,
) -> Result<String, AppError> {
    let io_error = |e: std::io::Error| AppError::Input(format!("Language prompt failed: {}", e));

    writeln!(output, "Found multiple possible source languages and confidence levels:").map_err(io_error)?;
    for candidate in candidates {
        writeln!(output, "{}: {}", candidate.code, candidate.confidence).map_err(io_error)?;
    }

    loop {
        write!(output, "Please type the correct language code: ").map_err(io_error)?;
        output.flush().map_err(io_error)?;

        let mut answer = String::new();
        if input.read_line(&mut answer).map_err(io_error)? == 0 {
            return Err(AppError::Input("No language code given before end of input".to_string()));
        }

        match match_candidate(candidates, &answer) {
            Ok(code) => return Ok(code),
            Err(e) => {
                debug!("Rejected language answer: {}", e);
                writeln!(output, "Invalid language code. Please try again.").map_err(io_error)?;
            }
        }
    }
}

/// Resolves an ambiguous detection to one language code
pub trait LanguageChooser {
    fn choose(&mut self, candidates: &[LanguageCandidate]) -> Result<String, AppError>;
}

/// Chooser reading answers from a stream and writing prompts to another
pub struct StreamChooser<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl StreamChooser<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Chooser bound to the process console
    pub fn console() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> LanguageChooser for StreamChooser<R, W> {
    fn choose(&mut self, candidates: &[LanguageCandidate]) -> Result<String, AppError> {
        choose_candidate(candidates, &mut self.input, &mut self.output)
    }
}

/// Detects the source language of a document through the backend
pub struct LanguageDetector<'a> {
    backend: &'a dyn TranslationBackend,
    catalog: &'a dyn LanguageCatalog,
}

impl<'a> LanguageDetector<'a> {
    pub fn new(backend: &'a dyn TranslationBackend, catalog: &'a dyn LanguageCatalog) -> Self {
        Self { backend, catalog }
    }

    /// Determine the language of `lines`
    pub async fn detect_source_language(
        &self,
        lines: &[String],
        chooser: &mut dyn LanguageChooser,
    ) -> Result<String, AppError> {
        let sample = select_detection_sample(lines).ok_or_else(|| {
            AppError::Detection("the file has no caption line to detect the language from".to_string())
        })?;
        debug!("Detection sample: {}", sample);

        let code = match self.backend.detect(sample).await? {
            Detection::Single(code) => code,
            Detection::Ambiguous(candidates) if candidates.is_empty() => {
                return Err(AppError::Detection("the service returned no candidate language".to_string()));
            }
            Detection::Ambiguous(candidates) => chooser.choose(&candidates)?,
        };

        let code = normalize_language_code(&code);
        if !self.catalog.is_valid(&code) {
            return Err(AppError::Detection(format!("detected language '{}' is not supported", code)));
        }

        info!(
            "Detected source language: {} ({})",
            code,
            self.catalog.language_name(&code).unwrap_or_default()
        );
        Ok(code)
    }
}
