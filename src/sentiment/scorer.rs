use super::{Lexicon, tokenize};

/// Computes the sadness ratio of a token sequence.
///
/// Counts the tokens whose lowercase form is in the lexicon and divides by
/// the number of tokens, with the denominator floored at 1. The result is
/// always within `[0, 1]` and an empty sequence scores `0`.
///
/// # Example
///
/// ```
/// let lexicon: Lexicon = [("sad", 1.0)].into_iter().collect();
/// assert_eq!(score(&["sad", "happy", "sad", "day"], &lexicon), 0.5);
/// ```
pub fn score<S: AsRef<str>>(tokens: &[S], lexicon: &Lexicon) -> f64 {
    let sad_count = tokens
        .iter()
        .filter(|token| lexicon.contains(token.as_ref()))
        .count();
    let word_count = tokens.len().max(1);

    sad_count as f64 / word_count as f64
}

/// Tokenizes `text` and scores it against `lexicon`.
pub fn score_text(text: &str, lexicon: &Lexicon) -> f64 {
    score(&tokenize(text), lexicon)
}
