/*!
 * Dictionary lookup links for reviewed words.
 *
 * A reviewer can attach a search link for a word to the line it appears
 * on. The link points at one of the supported online Belarusian
 * dictionaries, chosen in the report configuration.
 */

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Slot in a URL template replaced by the searched word
pub const WORD_PLACEHOLDER: &str = "{word}";

/// Supported online dictionaries
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryProvider {
    #[default]
    Vivy,
    Skarnik,
    Verbum,
}

impl DictionaryProvider {
    // @returns: Search URL with a {word} slot
    pub fn url_template(&self) -> &'static str {
        match self {
            Self::Vivy => "https://dictionaries.vivy.app/?q={word}",
            Self::Skarnik => "https://www.skarnik.by/search?term={word}&lang=beld",
            Self::Verbum => "https://verbum.by/?q={word}",
        }
    }

    // @returns: Lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vivy => "vivy",
            Self::Skarnik => "skarnik",
            Self::Verbum => "verbum",
        }
    }
}

impl fmt::Display for DictionaryProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DictionaryProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "vivy" => Ok(Self::Vivy),
            "skarnik" => Ok(Self::Skarnik),
            "verbum" => Ok(Self::Verbum),
            _ => Err(anyhow!("Invalid dictionary provider: {}", s)),
        }
    }
}

/// Link suffix ` (url)` searching `word` in `provider`
pub fn search_link(provider: DictionaryProvider, word: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(word.as_bytes()).collect();
    format!(" ({})", provider.url_template().replace(WORD_PLACEHOLDER, &encoded))
}

/// Normalize a selection into a search word: letters only, lowercased.
///
/// Returns `None` when the selection contains no letter.
pub fn lookup_word(selection: &str) -> Option<String> {
    let word: String = selection
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    (!word.is_empty()).then_some(word)
}

/// Text after inserting a dictionary link for a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkInsertion {
    /// Full text with the link appended to the selected line
    pub text: String,
    /// Byte offset just past the selection, where the cursor goes
    pub cursor: usize,
}

/// Append a search link for the selected word to the end of its line.
///
/// `start` and `len` are byte offsets into `text`. Returns `None` when the
/// selection is out of range, not on a character boundary, or has no letters.
pub fn insert_link(text: &str, start: usize, len: usize, provider: DictionaryProvider) -> Option<LinkInsertion> {
    let end = start.checked_add(len)?;
    let selection = text.get(start..end)?;
    let word = lookup_word(selection)?;

    let line_end = text[start..].find('\n').map_or(text.len(), |offset| start + offset);

    let mut result = String::with_capacity(text.len() + 64);
    result.push_str(&text[..line_end]);
    result.push_str(&search_link(provider, &word));
    result.push_str(&text[line_end..]);

    Some(LinkInsertion { text: result, cursor: end })
}
