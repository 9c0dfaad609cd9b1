use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, trace, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::file_utils::FileManager;
use crate::timecode::Timecode;

// @module: ASS/SSA script parsing into dialogue entries

// @const: Line break in any platform convention
static LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|\r|\n").expect("Invalid line break regex")
});

// @const: Override tag such as {\i1} or {note}
static OVERRIDE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{.*?\}").expect("Invalid override tag regex")
});

// @const: Opening of a style override block such as {\i1}
const STYLE_OVERRIDE_PREFIX: &str = "{\\";

// @const: Header opening the dialogue region
const EVENTS_SECTION_MARKER: &str = "[Events]";

// @const: Prefix of a cue line
const DIALOGUE_PREFIX: &str = "Dialogue:";

// @const: Fields in a cue line; the last one absorbs embedded commas
const DIALOGUE_FIELD_COUNT: usize = 10;

const START_FIELD: usize = 1;
const END_FIELD: usize = 2;
const TEXT_FIELD: usize = 9;

// @struct: Single dialogue cue
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueEntry {
    // @field: Cue start
    pub start: Timecode,

    // @field: Cue end
    pub end: Timecode,

    // @field: Displayed text with override tags stripped
    pub content: Option<String>,

    // @field: Trailing tag annotations, braces removed
    pub comment: Option<String>,
}

impl DialogueEntry {
    /// Creates an entry from raw timecode strings and already split text
    pub fn new(start: &str, end: &str, content: Option<&str>, comment: Option<&str>) -> Self {
        DialogueEntry {
            start: Timecode::parse(start),
            end: Timecode::parse(end),
            content: content.map(str::to_string),
            comment: comment.map(str::to_string),
        }
    }

    /// Whether both entries cover the same time span
    pub fn timecodes_match(&self, other: &DialogueEntry) -> bool {
        self.start == other.start && self.end == other.end
    }

    /// Whether this entry starts strictly before `other`
    pub fn starts_before(&self, other: &DialogueEntry) -> bool {
        self.start < other.start
    }

    /// Content or the empty string
    pub fn content_or_empty(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for DialogueEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{} - {}] {}", self.start, self.end, self.content_or_empty())
    }
}

/// Parse the cues of an ASS/SSA script.
///
/// Never fails: lines that do not look like cues are skipped.
pub fn parse_document(text: &str) -> Vec<DialogueEntry> {
    let mut entries = Vec::new();
    let mut in_events = false;
    let mut dropped = 0usize;

    for line in LINE_BREAK_REGEX.split(text).filter(|line| !line.is_empty()) {
        if line.starts_with(EVENTS_SECTION_MARKER) {
            in_events = true;
            continue;
        }

        if in_events && line.starts_with(DIALOGUE_PREFIX) {
            match parse_dialogue_line(line) {
                Some(entry) => entries.push(entry),
                None => dropped += 1,
            }
        }
    }

    if !in_events && !text.trim().is_empty() {
        warn!("No {} section found, document has no dialogue", EVENTS_SECTION_MARKER);
    }

    debug!("Parsed {} dialogue entries ({} malformed lines dropped)", entries.len(), dropped);

    entries
}

/// Parse one `Dialogue:` line, `None` when it has too few fields
pub fn parse_dialogue_line(line: &str) -> Option<DialogueEntry> {
    let fields: Vec<&str> = line.splitn(DIALOGUE_FIELD_COUNT, ',').collect();
    if fields.len() < DIALOGUE_FIELD_COUNT {
        trace!("Dropping dialogue line with {} fields: {}", fields.len(), line);
        return None;
    }

    let (content, comment) = split_text_field(fields[TEXT_FIELD].trim());

    Some(DialogueEntry {
        start: Timecode::parse(fields[START_FIELD]),
        end: Timecode::parse(fields[END_FIELD]),
        content,
        comment,
    })
}

/// Split a raw text field into displayed content and comment.
///
/// The comment is only collected when the field ends with a note tag (one
/// that is not a `{\...}` style override); it then holds every tag in the
/// field, concatenated without braces.
pub fn split_text_field(raw: &str) -> (Option<String>, Option<String>) {
    let ends_with_note = raw.ends_with('}')
        && OVERRIDE_TAG_REGEX
            .find_iter(raw)
            .last()
            .is_some_and(|tag| !tag.as_str().starts_with(STYLE_OVERRIDE_PREFIX));

    let comment = if ends_with_note {
        let joined: String = OVERRIDE_TAG_REGEX
            .find_iter(raw)
            .map(|tag| tag.as_str())
            .collect();
        let stripped = joined.replace(['{', '}'], "");
        (!stripped.is_empty()).then_some(stripped)
    } else {
        None
    };

    let content = OVERRIDE_TAG_REGEX.replace_all(raw, "");
    let content = content.trim();
    let content = (!content.is_empty()).then(|| content.to_string());

    (content, comment)
}

/// Parsed script with the file it came from
#[derive(Debug)]
pub struct SubtitleCollection {
    /// Source filename
    pub source_file: PathBuf,

    /// Dialogue entries in file order
    pub entries: Vec<DialogueEntry>,
}

impl SubtitleCollection {
    /// Parse an in-memory script
    pub fn from_text(source_file: PathBuf, text: &str) -> Self {
        SubtitleCollection {
            source_file,
            entries: parse_document(text),
        }
    }

    /// Read and parse a script from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = FileManager::read_to_string(path)
            .with_context(|| format!("Failed to load subtitle script: {}", path.display()))?;

        Ok(Self::from_text(path.to_path_buf(), &text))
    }

    /// Number of parsed entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries were parsed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
