/*!
 * # srt-translator
 *
 * A Rust library for translating `.srt` subtitle files through a remote
 * translation service.
 *
 * ## Features
 *
 * - Line-oriented chunked translation with a progress bar
 * - Source language auto-detection with interactive disambiguation
 * - Google Translate web backend, plus a mock backend for tests
 * - ISO 639-2 language codes accepted alongside the service's own codes
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: Subtitle document model
 * - `translation`: Chunking, the translation driver and language detection:
 *   - `translation::batch`: Chunk-by-chunk translation
 *   - `translation::detection`: Source language detection
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: Language catalog and code normalization
 * - `providers`: Translation backends:
 *   - `providers::google`: Google Translate client
 *   - `providers::mock`: Deterministic test backend
 * - `errors`: Custom error types for the application
 *
 * ## Known limitation
 *
 * Chunks are translated as plain text. The service may return a different
 * number of lines than it was given, which shifts caption lines relative to
 * index and timing lines for the rest of the file. The shift is logged as a
 * warning and left in the output.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod subtitle_processor;
pub mod translation;
pub mod app_controller;
pub mod language_utils;
pub mod providers;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use subtitle_processor::SubtitleDocument;
