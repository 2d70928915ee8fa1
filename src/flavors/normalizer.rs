//! Free text to canonical flavor mentions.

use super::table::SynonymTable;

/// Extract canonical flavor mentions from a snippet of text.
///
/// Matching is case-insensitive substring containment, not tokenized:
/// "chocolate" inside "chocolately" matches. That imprecision is
/// accepted, the corpus is noisy social text and word-boundary rules
/// would cost more recall than they buy precision.
///
/// Each canonical flavor is emitted at most once regardless of how
/// many of its variants occur; emission order follows the table.
/// Pure function of the text and the table; no matches yields an
/// empty vec, never an error.
pub fn normalize(table: &SynonymTable, text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();

    table
        .iter()
        .filter(|entry| entry.variants.iter().any(|v| text_lower.contains(v.as_str())))
        .map(|entry| entry.canonical.clone())
        .collect()
}
