use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::app_config::DecodeMode;
use crate::errors::AppError;
use crate::subtitle_processor::SubtitleDocument;

// @module: File and directory utilities

/// Extension every input file must carry
pub const SUBTITLE_EXTENSION: &str = "srt";

const UTF8_BOM: char = '\u{feff}';

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<(), AppError> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @checks: Path ends in the subtitle extension (any case)
    pub fn ensure_subtitle_extension<P: AsRef<Path>>(path: P) -> Result<(), AppError> {
        let path = path.as_ref();
        let is_subtitle = path
            .extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(SUBTITLE_EXTENSION));

        if !is_subtitle {
            return Err(AppError::Config(format!(
                "File {} is not a .{} file",
                path.display(),
                SUBTITLE_EXTENSION
            )));
        }
        Ok(())
    }

    // @generates: Output path for translated subtitle
    // @params: input_file, target_language
    pub fn derive_output_path<P: AsRef<Path>>(input_file: P, target_language: &str) -> PathBuf {
        let input_file = input_file.as_ref();

        // Get the file stem (filename without extension)
        let stem = input_file.file_stem().unwrap_or_default();

        let mut output_filename = stem.to_os_string();
        output_filename.push("_");
        output_filename.push(target_language);
        if let Some(ext) = input_file.extension() {
            output_filename.push(".");
            output_filename.push(ext);
        }

        input_file.with_file_name(output_filename)
    }

    /// Decode raw file bytes according to `mode`
    pub fn decode(bytes: Vec<u8>, mode: DecodeMode, path: &Path) -> Result<String, AppError> {
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => match mode {
                DecodeMode::Strict => {
                    return Err(AppError::Input(format!(
                        "File {} is not valid UTF-8: {}",
                        path.display(),
                        e.utf8_error()
                    )));
                }
                DecodeMode::Ignore => {
                    let bytes = e.into_bytes();
                    let text: String = bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();
                    warn!(
                        "Dropped {} undecodable bytes from {}",
                        bytes.len() - text.len(),
                        path.display()
                    );
                    text
                }
            },
        };

        Ok(match text.strip_prefix(UTF8_BOM) {
            Some(stripped) => stripped.to_string(),
            None => text,
        })
    }

    /// Read a subtitle file into a document
    pub fn read_document<P: AsRef<Path>>(path: P, mode: DecodeMode) -> Result<SubtitleDocument, AppError> {
        let path = path.as_ref();
        Self::ensure_subtitle_extension(path)?;

        let bytes = fs::read(path)
            .map_err(|e| AppError::Input(format!("Failed to read file {}: {}", path.display(), e)))?;
        let text = Self::decode(bytes, mode, path)?;

        let document = SubtitleDocument::from_text(path, &text);
        debug!("Read {}", document);
        Ok(document)
    }

    /// Write a document's lines, joined with `\n`, replacing any existing file
    pub fn write_document<P: AsRef<Path>>(path: P, document: &SubtitleDocument) -> Result<(), AppError> {
        let path = path.as_ref();

        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(path, document.to_text())
            .map_err(|e| AppError::Input(format!("Failed to write to file {}: {}", path.display(), e)))?;

        Ok(())
    }
}
