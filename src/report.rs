/*!
 * Text rendering of a change list.
 *
 * The tag words and the arrow separator are read by existing reviewers
 * and tooling, so they are reproduced exactly.
 */

use std::borrow::Cow;
use std::fmt::Write;

use crate::app_config::ReportConfig;
use crate::changes::{ChangeType, SubtitleChange};

/// Tag of a cue only present in the edited script
pub const ADDED_TAG: &str = "[ДАДАДЗЕНА]";

/// Tag of a cue only present in the translated script
pub const DELETED_TAG: &str = "[ВЫДАЛЕНА]";

/// Tag of a comment line
pub const COMMENT_TAG: &str = "[КАМЕНТАРЫЙ]";

/// Separator between translated and edited text of a modified cue
pub const ARROW: &str = " → ";

/// Render `changes` as newline-terminated report lines
pub fn format_report(changes: &[SubtitleChange], config: &ReportConfig) -> String {
    let mut report = String::new();
    for change in changes {
        write_change(&mut report, change, config);
    }
    report
}

fn write_change(out: &mut String, change: &SubtitleChange, config: &ReportConfig) {
    let index_info = if config.show_indexes {
        format!("[~{}]", change.approx_position)
    } else {
        String::new()
    };

    let time_range = match change.display_entry() {
        Some(entry) if config.show_timecodes => format!(
            " [{} - {}]",
            entry.start.display_text(),
            entry.end.display_text()
        ),
        None if config.show_timecodes => " [ - ]".to_string(),
        _ => String::new(),
    };

    // Writing into a String cannot fail
    match change.kind {
        ChangeType::Added => {
            let content = change.to.as_ref().and_then(|entry| entry.content.as_deref());
            if config.show_added && content.is_some_and(|text| !text.trim().is_empty()) {
                let _ = writeln!(out, "{}{}{}: {}", index_info, ADDED_TAG, time_range, content.unwrap_or_default());
            }
        }
        ChangeType::Deleted => {
            if config.show_deleted {
                let content = change.from.as_ref().map(|entry| entry.content_or_empty()).unwrap_or_default();
                let _ = writeln!(out, "{}{}{}: {}", index_info, DELETED_TAG, time_range, content);
            }
        }
        ChangeType::Modified => {
            let (before, after) = modified_texts(change);
            let _ = writeln!(out, "{}{}", index_info, time_range);
            let _ = writeln!(out, "{}{}{}", before, ARROW, after);
        }
        ChangeType::Unchanged => {}
    }

    if config.show_comments {
        if let Some(comment) = change.to.as_ref().and_then(|entry| entry.comment.as_deref()) {
            let _ = writeln!(out, "{} {}", COMMENT_TAG, comment);
        }
    }
}

// Underlined texts when a word diff exists, raw contents otherwise
fn modified_texts(change: &SubtitleChange) -> (Cow<'_, str>, Cow<'_, str>) {
    if let Some(diff) = &change.word_diff {
        return (Cow::Owned(diff.render_translated()), Cow::Owned(diff.render_edited()));
    }

    let before = change.from.as_ref().map(|entry| entry.content_or_empty()).unwrap_or_default();
    let after = change.to.as_ref().map(|entry| entry.content_or_empty()).unwrap_or_default();
    (Cow::Borrowed(before), Cow::Borrowed(after))
}
