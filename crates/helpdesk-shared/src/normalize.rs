//! Input normalization applied before any pattern is tested.
//!
//! Patterns are written against lowercase ASCII punctuation, so typographic
//! quotes pasted from word processors or phone keyboards are folded here.

/// Lowercase and fold curly quotes to their ASCII equivalents
pub fn normalize_input(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}
