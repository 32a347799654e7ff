/*!
 * Translation of subtitle documents through a remote backend.
 *
 * - `batch`: Chunking and the sequential chunk-by-chunk driver
 * - `detection`: Source language detection and disambiguation
 */

// Re-export main types for easier usage
pub use self::batch::{chunk_lines, BatchTranslator};
pub use self::detection::{
    choose_candidate, select_detection_sample, LanguageChooser, LanguageDetector, StreamChooser,
};

// Submodules
pub mod batch;
pub mod detection;
