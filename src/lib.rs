/*!
 * # assdiff - change reports for ASS/SSA subtitle scripts
 *
 * A Rust library that compares a translated subtitle script with its edited
 * revision and reports what the editor changed.
 *
 * ## Features
 *
 * - Parse the `[Events]` dialogue of ASS/SSA scripts, tolerating malformed lines
 * - Pair cues by timing and classify them as added, deleted or modified
 * - Underline the exact words that changed inside a modified cue
 * - Configurable report (indexes, time ranges, comments, added/deleted cues)
 * - Dictionary lookup links for reviewed words
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timecode`: Timestamp parsing and ordering
 * - `subtitle_processor`: Script parsing into dialogue entries
 * - `tokenizer`: Word tokenizer for word-level diffs
 * - `alignment`: LCS alignment of two token sequences
 * - `changes`: Chronological merge into a change list
 * - `report`: Text rendering of a change list
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `dictionary`: Dictionary lookup links
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
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
pub mod alignment;
pub mod app_config;
pub mod app_controller;
pub mod changes;
pub mod dictionary;
pub mod errors;
pub mod file_utils;
pub mod report;
pub mod subtitle_processor;
pub mod timecode;
pub mod tokenizer;

// Re-export main types for easier usage
pub use alignment::{align, Alignment, MarkedToken};
pub use app_config::{Config, ReportConfig};
pub use app_controller::{Comparison, Controller};
pub use changes::{find_changes, ChangeStats, ChangeType, SubtitleChange};
pub use dictionary::DictionaryProvider;
pub use errors::{AppError, ConfigError};
pub use report::format_report;
pub use subtitle_processor::{parse_document, DialogueEntry, SubtitleCollection};
pub use timecode::Timecode;
pub use tokenizer::tokenize;

/// Parse both scripts, merge them and render the report in one call
pub fn compare(translated: &str, edited: &str, config: &ReportConfig) -> String {
    let changes = find_changes(&parse_document(translated), &parse_document(edited), config);
    format_report(&changes, config)
}
