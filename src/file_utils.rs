use anyhow::{Result, Context};
use std::fs;
use std::path::Path;

// @module: File and directory utilities

// @const: Extensions of ASS/SSA subtitle scripts
const SCRIPT_EXTENSIONS: [&str; 2] = ["ass", "ssa"];

// @const: Section headers that identify a script by content
const SCRIPT_MARKERS: [&str; 2] = ["[Script Info]", "[Events]"];

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @checks: .ass/.ssa extension, case-insensitive
    pub fn is_subtitle_script<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext.as_str()))
    }

    /// Read a file to a string, dropping a leading byte order mark
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))?;

        Ok(match content.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => content,
        })
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Detect whether a file is an ASS/SSA script, by extension first and content second
    pub fn detect_file_type<P: AsRef<Path>>(path: P) -> Result<FileType> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(anyhow::anyhow!("File does not exist: {:?}", path));
        }

        if Self::is_subtitle_script(path) {
            return Ok(FileType::SubtitleScript);
        }

        // Fall back to examining file contents
        if let Ok(content) = Self::read_to_string(path) {
            if content.lines().any(|line| SCRIPT_MARKERS.iter().any(|marker| line.starts_with(marker))) {
                return Ok(FileType::SubtitleScript);
            }
        }

        Ok(FileType::Unknown)
    }
}

/// Enum representing different file types
#[derive(Debug, PartialEq, Eq)]
pub enum FileType {
    /// ASS/SSA subtitle script
    SubtitleScript,
    /// Unknown file type
    Unknown,
}
