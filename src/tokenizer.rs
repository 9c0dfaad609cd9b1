/*!
 * Word tokenizer used by the word-level diff.
 *
 * A line is cut into runs of word characters (apostrophes included, so
 * contractions stay whole), runs of whitespace, and single punctuation
 * characters. Every character of the input lands in exactly one token.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Word run, whitespace run, or any other single character
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\w']+|\s+|[^\w\s']").expect("Invalid token regex")
});

/// Split `text` into tokens borrowed from it
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}
