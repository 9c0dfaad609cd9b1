/*!
 * Word-level alignment of two versions of a line.
 *
 * Uses a longest-common-subsequence table over the two token sequences to
 * decide which tokens survived the edit. Tokens outside the common
 * subsequence are marked as changed and rendered underlined.
 */

use std::borrow::Cow;

/// Combining low line, appended after every character of a changed token
pub const UNDERLINE_MARK: char = '\u{0332}';

/// A token with its diff status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedToken {
    /// Token text as produced by the tokenizer
    pub text: String,
    /// Whether the token is outside the common subsequence
    pub changed: bool,
}

impl MarkedToken {
    fn kept(text: &str) -> Self {
        Self { text: text.to_string(), changed: false }
    }

    fn changed(text: &str) -> Self {
        Self { text: text.to_string(), changed: true }
    }

    /// Text with the underline mark applied when the token changed
    pub fn render(&self) -> Cow<'_, str> {
        if self.changed {
            Cow::Owned(underline(&self.text))
        } else {
            Cow::Borrowed(&self.text)
        }
    }
}

/// Result of aligning a translated line against its edited version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    /// Every translated token, in order
    pub translated: Vec<MarkedToken>,
    /// Every edited token, in order
    pub edited: Vec<MarkedToken>,
}

impl Alignment {
    /// Translated line with changed tokens underlined
    pub fn render_translated(&self) -> String {
        render_tokens(&self.translated)
    }

    /// Edited line with changed tokens underlined
    pub fn render_edited(&self) -> String {
        render_tokens(&self.edited)
    }

    /// Unchanged translated tokens, which form the common subsequence
    pub fn common_tokens(&self) -> Vec<&str> {
        self.translated
            .iter()
            .filter(|token| !token.changed)
            .map(|token| token.text.as_str())
            .collect()
    }

    /// Whether any token on either side changed
    pub fn has_changes(&self) -> bool {
        self.translated.iter().chain(&self.edited).any(|token| token.changed)
    }
}

fn render_tokens(tokens: &[MarkedToken]) -> String {
    tokens.iter().map(|token| token.render()).collect()
}

/// Append the underline mark to every character of `word`
pub fn underline(word: &str) -> String {
    let mut result = String::with_capacity(word.len() * 3);
    for c in word.chars() {
        result.push(c);
        result.push(UNDERLINE_MARK);
    }
    result
}

/// Suffix LCS lengths: `table[i][j]` is the LCS length of `a[i..]` and `b[j..]`.
///
/// Stored row-major in a flat vector of `(a.len() + 1) * (b.len() + 1)` cells.
struct LcsTable {
    cells: Vec<usize>,
    width: usize,
}

impl LcsTable {
    fn build(a: &[&str], b: &[&str]) -> Self {
        let width = b.len() + 1;
        let mut table = LcsTable {
            cells: vec![0; (a.len() + 1) * width],
            width,
        };

        for i in (0..a.len()).rev() {
            for j in (0..b.len()).rev() {
                let value = if a[i] == b[j] {
                    1 + table.get(i + 1, j + 1)
                } else {
                    table.get(i + 1, j).max(table.get(i, j + 1))
                };
                table.cells[i * width + j] = value;
            }
        }

        table
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }
}

/// Align two token sequences.
///
/// Matching tokens pass through unmarked. On a mismatch the side whose
/// skip keeps the larger remaining LCS is advanced, the translated side
/// winning ties. Whatever is left once one side runs out is marked.
pub fn align(translated: &[&str], edited: &[&str]) -> Alignment {
    let table = LcsTable::build(translated, edited);
    let mut alignment = Alignment {
        translated: Vec::with_capacity(translated.len()),
        edited: Vec::with_capacity(edited.len()),
    };

    let (mut i, mut j) = (0, 0);
    while i < translated.len() && j < edited.len() {
        if translated[i] == edited[j] {
            alignment.translated.push(MarkedToken::kept(translated[i]));
            alignment.edited.push(MarkedToken::kept(edited[j]));
            i += 1;
            j += 1;
        } else if table.get(i + 1, j) >= table.get(i, j + 1) {
            alignment.translated.push(MarkedToken::changed(translated[i]));
            i += 1;
        } else {
            alignment.edited.push(MarkedToken::changed(edited[j]));
            j += 1;
        }
    }

    alignment
        .translated
        .extend(translated[i..].iter().map(|token| MarkedToken::changed(token)));
    alignment
        .edited
        .extend(edited[j..].iter().map(|token| MarkedToken::changed(token)));

    alignment
}
