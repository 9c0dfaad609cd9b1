/*!
 * Chronological merge of two dialogue sequences into a change list.
 *
 * The translated and edited scripts are walked with one cursor each. Cues
 * with identical timing are paired and compared by content; otherwise the
 * cue that starts earlier on the edited side counts as added and anything
 * else as deleted from the translated side.
 */

use std::fmt;

use log::debug;

use crate::alignment::{self, Alignment};
use crate::app_config::ReportConfig;
use crate::subtitle_processor::DialogueEntry;
use crate::tokenizer::tokenize;

/// Classification of one change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    Unchanged,
    Added,
    Deleted,
    Modified,
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unchanged => "unchanged",
            Self::Added => "added",
            Self::Deleted => "deleted",
            Self::Modified => "modified",
        };
        write!(f, "{}", name)
    }
}

/// One reported difference between the two scripts
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleChange {
    /// Kind of change
    pub kind: ChangeType,

    /// Translated cue, present for deletions and modifications
    pub from: Option<DialogueEntry>,

    /// Edited cue, present for additions and modifications
    pub to: Option<DialogueEntry>,

    /// Cursor position in the sequence the cue came from
    pub approx_position: usize,

    /// Word-level alignment of a modified pair, when underlining is on
    pub word_diff: Option<Alignment>,
}

impl SubtitleChange {
    fn added(entry: &DialogueEntry, position: usize) -> Self {
        Self {
            kind: ChangeType::Added,
            from: None,
            to: Some(entry.clone()),
            approx_position: position,
            word_diff: None,
        }
    }

    fn deleted(entry: &DialogueEntry, position: usize) -> Self {
        Self {
            kind: ChangeType::Deleted,
            from: Some(entry.clone()),
            to: None,
            approx_position: position,
            word_diff: None,
        }
    }

    fn modified(translated: &DialogueEntry, edited: &DialogueEntry, position: usize, underline: bool) -> Self {
        let word_diff = match (&translated.content, &edited.content) {
            (Some(before), Some(after)) if underline => {
                Some(alignment::align(&tokenize(before), &tokenize(after)))
            }
            _ => None,
        };

        Self {
            kind: ChangeType::Modified,
            from: Some(translated.clone()),
            to: Some(edited.clone()),
            approx_position: position,
            word_diff,
        }
    }

    /// The edited cue if present, otherwise the translated one
    pub fn display_entry(&self) -> Option<&DialogueEntry> {
        self.to.as_ref().or(self.from.as_ref())
    }
}

/// Per-kind counts of a change list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeStats {
    pub added: usize,
    pub deleted: usize,
    pub modified: usize,
}

impl ChangeStats {
    pub fn from_changes(changes: &[SubtitleChange]) -> Self {
        changes.iter().fold(Self::default(), |mut stats, change| {
            match change.kind {
                ChangeType::Added => stats.added += 1,
                ChangeType::Deleted => stats.deleted += 1,
                ChangeType::Modified => stats.modified += 1,
                ChangeType::Unchanged => {}
            }
            stats
        })
    }

    pub fn total(&self) -> usize {
        self.added + self.deleted + self.modified
    }
}

impl fmt::Display for ChangeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} modified, {} added, {} deleted",
            self.modified, self.added, self.deleted
        )
    }
}

/// Merge the translated and edited cues into a list of changes.
///
/// Every step consumes at least one cue, so the walk ends after at most
/// `translated.len() + edited.len()` steps. Paired cues with equal content
/// are consumed without producing a change.
pub fn find_changes(
    translated: &[DialogueEntry],
    edited: &[DialogueEntry],
    config: &ReportConfig,
) -> Vec<SubtitleChange> {
    let mut changes = Vec::new();
    let mut trans_index = 0;
    let mut ed_index = 0;
    let mut unchanged = 0usize;

    loop {
        match (translated.get(trans_index), edited.get(ed_index)) {
            (Some(trans_line), Some(ed_line)) => {
                if trans_line.timecodes_match(ed_line) {
                    if trans_line.content != ed_line.content {
                        changes.push(SubtitleChange::modified(
                            trans_line,
                            ed_line,
                            trans_index,
                            config.underline_changes,
                        ));
                    } else {
                        unchanged += 1;
                    }
                    trans_index += 1;
                    ed_index += 1;
                } else if ed_line.starts_before(trans_line) {
                    changes.push(SubtitleChange::added(ed_line, ed_index));
                    ed_index += 1;
                } else {
                    changes.push(SubtitleChange::deleted(trans_line, trans_index));
                    trans_index += 1;
                }
            }
            (Some(trans_line), None) => {
                changes.push(SubtitleChange::deleted(trans_line, trans_index));
                trans_index += 1;
            }
            (None, Some(ed_line)) => {
                changes.push(SubtitleChange::added(ed_line, ed_index));
                ed_index += 1;
            }
            (None, None) => break,
        }
    }

    debug!(
        "Merged {} translated and {} edited entries: {} ({} unchanged)",
        translated.len(),
        edited.len(),
        ChangeStats::from_changes(&changes),
        unchanged
    );

    changes
}
