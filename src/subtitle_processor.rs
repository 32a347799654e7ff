use std::fmt;
use std::path::{Path, PathBuf};

// @module: Subtitle document handling

/// Marker separating start and end timestamps on an SRT timing line
pub const TIMING_ARROW: &str = "-->";

/// Raw content of a subtitle file as an ordered list of lines
///
/// Lines are opaque: index, timing and caption lines are not told apart
/// except by the language detector's sample selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleDocument {
    /// File the document was read from
    pub source_file: PathBuf,

    /// Lines of the file, without their `\n` terminator
    pub lines: Vec<String>,
}

impl SubtitleDocument {
    /// Build a document from text, splitting on `\n`
    ///
    /// A trailing newline yields a final empty line so that joining the
    /// lines back with `\n` reproduces the text exactly.
    pub fn from_text<P: AsRef<Path>>(source_file: P, text: &str) -> Self {
        Self {
            source_file: source_file.as_ref().to_path_buf(),
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// Build a document from lines already split
    pub fn from_lines<P: AsRef<Path>>(source_file: P, lines: Vec<String>) -> Self {
        Self {
            source_file: source_file.as_ref().to_path_buf(),
            lines,
        }
    }

    /// Join lines back into file content
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for SubtitleDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} lines)", self.source_file.display(), self.lines.len())
    }
}

/// Whether a line carries caption text
///
/// Empty lines, subtitle indexes and timing lines are not content.
pub fn is_content_line(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.contains(TIMING_ARROW) {
        return false;
    }
    !trimmed.chars().all(char::is_numeric)
}
