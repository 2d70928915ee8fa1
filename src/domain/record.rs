//! Corpus records.
//!
//! A TextRecord is one snippet of consumer text (a review, a forum
//! post, a research note) tagged with where it came from. Records are
//! immutable once produced; duplicates are permitted and never
//! deduplicated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single snippet of consumer text from one source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRecord {
    /// The raw text of the snippet
    pub text: String,

    /// Source label (e.g. "Amazon (whey protein)", "r/fitness").
    /// Fallback records carry a "(fallback)" suffix so they stay
    /// distinguishable from live data.
    pub source: String,

    /// Engagement score (upvotes, star rating, etc. depending on source)
    pub engagement_score: i64,

    /// Number of comments/replies attached to the snippet
    pub comment_count: i64,

    /// When the snippet was created (or gathered, for synthetic records)
    pub created_at: DateTime<Utc>,
}

impl TextRecord {
    /// Create a record timestamped now
    pub fn new(
        text: impl Into<String>,
        source: impl Into<String>,
        engagement_score: i64,
        comment_count: i64,
    ) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            engagement_score,
            comment_count,
            created_at: Utc::now(),
        }
    }
}
