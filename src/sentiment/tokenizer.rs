use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("static word pattern"));

/// Splits text into word tokens (runs of alphanumerics and underscores).
///
/// Case is preserved; folding happens when a token is looked up in the
/// lexicon. Empty input yields an empty vector.
///
/// # Example
///
/// ```
/// assert_eq!(tokenize("The clock's run out"), vec!["The", "clock", "s", "run", "out"]);
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}
