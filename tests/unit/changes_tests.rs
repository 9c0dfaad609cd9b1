/*!
 * Tests for the chronological change merge
 */

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use assdiff::app_config::ReportConfig;
use assdiff::changes::{find_changes, ChangeStats, ChangeType};
use assdiff::subtitle_processor::{parse_document, DialogueEntry};
use crate::common;

fn entry(start: &str, end: &str, content: &str) -> DialogueEntry {
    DialogueEntry::new(start, end, Some(content), None)
}

/// Same timing, different text: one modification
#[test]
fn test_findChanges_withEditedText_shouldReportModified() {
    let translated = [entry("0:00:01.00", "0:00:02.00", "Hello")];
    let edited = [entry("0:00:01.00", "0:00:02.00", "Hi")];

    let changes = find_changes(&translated, &edited, &ReportConfig::default());

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeType::Modified);
    assert_eq!(changes[0].approx_position, 0);
    assert_eq!(changes[0].from.as_ref().unwrap().content.as_deref(), Some("Hello"));
    assert_eq!(changes[0].to.as_ref().unwrap().content.as_deref(), Some("Hi"));
}

/// Literal cue lines with the layer field left empty
#[test]
fn test_findChanges_withParsedHelloHi_shouldMarkBothWordsChanged() {
    let translated = parse_document("[Events]\nDialogue:,0,0:00:01.00,0:00:02.00,,,,,,Hello\n");
    let edited = parse_document("[Events]\nDialogue:,0,0:00:01.00,0:00:02.00,,,,,,Hi\n");

    let changes = find_changes(&translated, &edited, &ReportConfig::default());

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeType::Modified);
    let diff = changes[0].word_diff.as_ref().unwrap();
    assert!(diff.common_tokens().is_empty());
    assert!(diff.translated.iter().chain(&diff.edited).all(|token| token.changed));
}

/// A cue only in the edited script, before every translated cue
#[test]
fn test_findChanges_withInsertedCue_shouldReportAddedAtEditedIndex() {
    let translated = [entry("0:00:05.00", "0:00:06.00", "X")];
    let edited = [entry("0:00:00.50", "0:00:01.00", "New"), entry("0:00:05.00", "0:00:06.00", "X")];

    let changes = find_changes(&translated, &edited, &ReportConfig::default());

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeType::Added);
    assert_eq!(changes[0].approx_position, 0);
    assert_eq!(changes[0].to.as_ref().unwrap().content.as_deref(), Some("New"));
}

/// A translated cue that was removed
#[test]
fn test_findChanges_withRemovedCue_shouldReportDeleted() {
    let translated = [entry("0:00:01.00", "0:00:02.00", "A"), entry("0:00:03.00", "0:00:04.00", "B")];
    let edited = [entry("0:00:01.00", "0:00:02.00", "A")];

    let changes = find_changes(&translated, &edited, &ReportConfig::default());

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeType::Deleted);
    assert_eq!(changes[0].approx_position, 1);
    assert_eq!(changes[0].from.as_ref().unwrap().content.as_deref(), Some("B"));
}

#[test]
fn test_findChanges_withEmptyInputs_shouldReportNothing() {
    assert!(find_changes(&[], &[], &ReportConfig::default()).is_empty());
}

#[test]
fn test_findChanges_withOnlyCommentChanged_shouldReportNothing() {
    let translated = [entry("0:00:01.00", "0:00:02.00", "Same")];
    let edited = [DialogueEntry::new("0:00:01.00", "0:00:02.00", Some("Same"), Some("looks fine"))];

    assert!(find_changes(&translated, &edited, &ReportConfig::default()).is_empty());
}

#[test]
fn test_findChanges_withSampleScripts_shouldFollowMergeOrder() {
    let translated = parse_document(&common::translated_script());
    let edited = parse_document(&common::edited_script());

    let changes = find_changes(&translated, &edited, &ReportConfig::default());
    let summary: Vec<(ChangeType, usize)> = changes.iter().map(|c| (c.kind, c.approx_position)).collect();

    assert_eq!(
        summary,
        vec![(ChangeType::Added, 0), (ChangeType::Modified, 1), (ChangeType::Deleted, 2)]
    );
    assert_eq!(ChangeStats::from_changes(&changes).to_string(), "1 modified, 1 added, 1 deleted");
}

// Random sorted cues drawn from a small pool of timings so that pairs collide often
fn random_script(rng: &mut StdRng) -> Vec<DialogueEntry> {
    let mut starts: Vec<u64> = (0..rng.random_range(0..10)).map(|_| rng.random_range(0..15)).collect();
    starts.sort_unstable();

    starts
        .into_iter()
        .map(|start| {
            let length = rng.random_range(1..3);
            let text = ["one", "two", "three"][rng.random_range(0..3)];
            entry(&format!("0:00:{:02}.00", start), &format!("0:00:{:02}.00", start + length), text)
        })
        .collect()
}

/// Every cue is accounted for exactly once and the list never exceeds both lengths
#[test]
fn test_findChanges_withRandomScripts_shouldCoverEveryCue() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..300 {
        let translated = random_script(&mut rng);
        let edited = random_script(&mut rng);
        let changes = find_changes(&translated, &edited, &ReportConfig::default());

        assert!(changes.len() <= translated.len() + edited.len());

        let stats = ChangeStats::from_changes(&changes);
        let unchanged_pairs = translated.len() - stats.deleted - stats.modified;
        assert_eq!(edited.len() - stats.added - stats.modified, unchanged_pairs);

        for change in &changes {
            match change.kind {
                ChangeType::Added => {
                    assert!(change.from.is_none());
                    assert_eq!(change.to.as_ref(), Some(&edited[change.approx_position]));
                }
                ChangeType::Deleted => {
                    assert!(change.to.is_none());
                    assert_eq!(change.from.as_ref(), Some(&translated[change.approx_position]));
                }
                ChangeType::Modified => {
                    let (from, to) = (change.from.as_ref().unwrap(), change.to.as_ref().unwrap());
                    assert!(from.timecodes_match(to));
                    assert_ne!(from.content, to.content);
                }
                ChangeType::Unchanged => panic!("unchanged pairs are never emitted"),
            }
        }
    }
}
