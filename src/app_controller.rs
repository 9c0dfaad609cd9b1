use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::app_config::{Config, ReportConfig};
use crate::changes::{self, ChangeStats, SubtitleChange};
use crate::file_utils::{FileManager, FileType};
use crate::report;
use crate::subtitle_processor::{self, DialogueEntry, SubtitleCollection};

// @module: Application controller

/// Outcome of one comparison run
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Classified changes in merge order
    pub changes: Vec<SubtitleChange>,
    /// Per-kind counts of `changes`
    pub stats: ChangeStats,
    /// Rendered report
    pub report: String,
}

// @struct: Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @creates: Controller with given config
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    // @returns: Active report toggles
    pub fn report_config(&self) -> &ReportConfig {
        &self.config.report
    }

    /// Compare two in-memory scripts
    pub fn compare_texts(&self, translated: &str, edited: &str) -> Comparison {
        let translated = subtitle_processor::parse_document(translated);
        let edited = subtitle_processor::parse_document(edited);
        self.compare_entries(&translated, &edited)
    }

    /// Compare two already parsed cue sequences
    pub fn compare_entries(&self, translated: &[DialogueEntry], edited: &[DialogueEntry]) -> Comparison {
        let config = &self.config.report;
        let changes = changes::find_changes(translated, edited, config);
        let stats = ChangeStats::from_changes(&changes);
        let report = report::format_report(&changes, config);

        Comparison { changes, stats, report }
    }

    /// Load and compare two script files
    pub fn compare_files<P1: AsRef<Path>, P2: AsRef<Path>>(&self, translated: P1, edited: P2) -> Result<Comparison> {
        let start_time = Instant::now();

        let translated = Self::load_script(translated.as_ref())
            .context("Failed to load translated script")?;
        let edited = Self::load_script(edited.as_ref())
            .context("Failed to load edited script")?;

        let comparison = self.compare_entries(&translated.entries, &edited.entries);

        info!(
            "Compared {} translated and {} edited cues: {}",
            translated.len(),
            edited.len(),
            comparison.stats
        );
        debug!("Comparison finished in {:?}", start_time.elapsed());

        Ok(comparison)
    }

    fn load_script(path: &Path) -> Result<SubtitleCollection> {
        if FileManager::detect_file_type(path)? == FileType::Unknown {
            warn!("{:?} does not look like an ASS/SSA script, parsing anyway", path);
        }

        let collection = SubtitleCollection::from_file(path)?;
        if collection.is_empty() {
            warn!("No dialogue found in {:?}", path);
        }

        Ok(collection)
    }
}
