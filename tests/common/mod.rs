/*!
 * Common test utilities for the assdiff test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Script header preceding the dialogue lines
pub const SCRIPT_HEADER: &str = "[Script Info]
Title: Test script
ScriptType: v4.00+

[V4+ Styles]
Format: Name, Fontname, Fontsize
Style: Default,Arial,20

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
";

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

/// Formats one dialogue line
pub fn dialogue(start: &str, end: &str, text: &str) -> String {
    format!("Dialogue: 0,{},{},Default,,0,0,0,,{}", start, end, text)
}

/// Builds a full script from (start, end, text) cues
pub fn script(cues: &[(&str, &str, &str)]) -> String {
    let mut content = SCRIPT_HEADER.to_string();
    for (start, end, text) in cues {
        content.push_str(&dialogue(start, end, text));
        content.push('\n');
    }
    content
}

/// Translated sample used by workflow tests
pub fn translated_script() -> String {
    script(&[
        ("0:00:01.00", "0:00:03.00", "Добры вечар."),
        ("0:00:04.00", "0:00:06.00", "Я бачыў гэтага ката."),
        ("0:00:07.00", "0:00:09.00", "Пойдзем дадому."),
        ("0:00:10.00", "0:00:12.00", "Да заўтра!"),
    ])
}

/// Edited sample: one cue added, one modified, one deleted, one commented
pub fn edited_script() -> String {
    script(&[
        ("0:00:00.00", "0:00:00.90", "Раней..."),
        ("0:00:01.00", "0:00:03.00", "Добры вечар."),
        ("0:00:04.00", "0:00:06.00", "Я бачыў таго ката.{праверыць}"),
        ("0:00:10.00", "0:00:12.00", "Да заўтра!"),
    ])
}
