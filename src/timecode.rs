/*!
 * Timecode parsing and comparison for subtitle cues.
 *
 * Timecodes arrive as loosely formatted strings (`0:00:01.00`, `01:02`,
 * `1.02.03,04`). Parsing is total: anything that cannot be understood
 * becomes the zero duration so that a single bad cue never aborts a
 * comparison.
 */

use std::cmp::Ordering;
use std::fmt;
use std::time::Duration;

use log::trace;

/// Characters accepted between timecode fields
const FIELD_SEPARATORS: [char; 3] = [':', '.', ','];

/// A parsed timestamp that remembers the text it was parsed from.
///
/// Equality and ordering only look at the elapsed time, never at the text.
#[derive(Debug, Clone, Default)]
pub struct Timecode {
    text: String,
    elapsed: Duration,
}

impl Timecode {
    /// Parse a timecode, falling back to zero on malformed input
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let elapsed = Self::try_parse(text).unwrap_or_else(|| {
            trace!("Unparseable timecode '{}', using zero", text);
            Duration::ZERO
        });

        Timecode {
            text: text.to_string(),
            elapsed,
        }
    }

    /// Parse the `H:MM:SS` core of a timecode.
    ///
    /// Any of `:`, `.` and `,` separate fields. A two-field value is read as
    /// `MM:SS`; fields after the third are dropped, so sub-second parts never
    /// take part in the result.
    pub fn try_parse(text: &str) -> Option<Duration> {
        let fields: Vec<&str> = text.trim().split(&FIELD_SEPARATORS[..]).collect();

        let (hours, minutes, seconds) = match fields.as_slice() {
            [minutes, seconds] => ("0", *minutes, *seconds),
            [hours, minutes, seconds, ..] => (*hours, *minutes, *seconds),
            _ => return None,
        };

        let hours = parse_field(hours)?;
        let minutes = parse_field(minutes)?;
        let seconds = parse_field(seconds)?;

        if minutes >= 60 || seconds >= 60 {
            return None;
        }

        let total = hours.checked_mul(3600)?.checked_add(minutes * 60 + seconds)?;
        Some(Duration::from_secs(total))
    }

    /// Zero-length timecode
    pub fn zero() -> Self {
        Self::default()
    }

    /// Elapsed time since the start of the script
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Original text, trimmed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text for reports, with a leading zero-hour field elided (`0:00:05.00` -> `00:05.00`)
    pub fn display_text(&self) -> &str {
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some('0'), Some(sep)) if FIELD_SEPARATORS.contains(&sep) => &self.text[2..],
            _ => &self.text,
        }
    }
}

// Fields are plain unsigned decimal numbers; signs and blanks are rejected
fn parse_field(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        self.elapsed == other.elapsed
    }
}

impl Eq for Timecode {}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timecode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.elapsed.cmp(&other.elapsed)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
