//! Ranked flavor frequency table over a corpus.

use crate::domain::TextRecord;

use super::normalizer::normalize;
use super::table::SynonymTable;

/// Count canonical flavor mentions across a corpus and return the
/// `top_n` most frequent as `(flavor, count)` pairs.
///
/// The sort on count is stable and descending; flavors with equal
/// counts keep their first-encountered order. An empty corpus, or one
/// with no flavor mentions at all, yields an empty vec rather than an
/// error.
pub fn aggregate(
    table: &SynonymTable,
    records: &[TextRecord],
    top_n: usize,
) -> Vec<(String, usize)> {
    // Counts in first-encountered order so the later stable sort
    // preserves discovery order among ties.
    let mut counts: Vec<(String, usize)> = Vec::new();

    for record in records {
        for mention in normalize(table, &record.text) {
            match counts.iter_mut().find(|(flavor, _)| *flavor == mention) {
                Some((_, count)) => *count += 1,
                None => counts.push((mention, 1)),
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top_n);
    counts
}
