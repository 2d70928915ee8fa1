//! Curated competitor and market-research notes.
//!
//! Hand-authored observations about competitor flavor lineups and
//! Indian market gaps. Deterministic; this strategy never fails.

use async_trait::async_trait;

use crate::domain::TextRecord;

use super::{SourceError, SourceStrategy};

const COMPETITOR_NOTES: &[&str] = &[
    // Optimum Nutrition
    "ON Gold Standard is great but Double Rich Chocolate is getting boring",
    "Why don't Indian brands make flavors like ON's Cake Batter?",
    "ON has 20+ flavors, Indian brands need to step up",
    "Rocky Road flavor from ON is amazing, wish desi brands had this",
    // MyProtein
    "MyProtein's Salted Caramel is too sweet, need better options",
    "They have Sticky Toffee Pudding flavor! Indian brands are so basic",
    "MyProtein flavors are innovative, ours are stuck in chocolate-vanilla",
    // Dymatize
    "Dymatize ISO 100 has Gourmet Chocolate, way better than regular chocolate",
    "Birthday Cake flavor is so good, why don't we have fun flavors?",
    // Indian market feedback
    "All Indian protein brands taste the same - chocolate, vanilla, strawberry",
    "Missing authentic Indian flavors in supplements",
    "Would love to see masala chai or kesar pista protein",
    "Tired of artificial fruity flavors, want real fruit extracts",
    "Every brand has the same boring flavors, no innovation",
    // Specific complaints
    "Chocolate is too sweet in all Indian brands",
    "Vanilla is bland and artificial tasting",
    "Coffee flavor needs upgrade - try mocha or cappuccino",
    "Mango flavor tastes like candy, not real mango",
    "Strawberry milkshake is too artificial",
    // Desires
    "Want premium dessert flavors like tiramisu or cheesecake",
    "Natural sweeteners would be great, stevia or monk fruit",
    "Coconut flavors are underrated in India",
    "Peanut butter banana combo would be perfect",
    "Dark chocolate with less sweetness please",
    "Seasonal flavors would be exciting - mango in summer would be very refreshing and cooling",
    "Buttercotch toffee would be a hit",
    "Rose or gulkand for traditional Indian taste",
    "Kulfi flavor would be unique and Indian",
    "Filter coffee for South Indian audience",
];

const SOURCE_LABEL: &str = "Market Research";

fn research_records(label: &str) -> Vec<TextRecord> {
    COMPETITOR_NOTES
        .iter()
        .enumerate()
        .map(|(i, note)| {
            TextRecord::new(*note, label, 3 + (i as i64 % 3), (i as i64 % 5) + 1)
        })
        .collect()
}

/// Static market-research strategy
pub struct MarketResearchSource;

impl Default for MarketResearchSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketResearchSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SourceStrategy for MarketResearchSource {
    fn name(&self) -> &str {
        "market-research"
    }

    async fn gather(&self) -> Result<Vec<TextRecord>, SourceError> {
        Ok(research_records(SOURCE_LABEL))
    }

    fn fallback(&self) -> Vec<TextRecord> {
        research_records("Market Research (fallback)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_research_source_always_succeeds() {
        let source = MarketResearchSource::new();
        let records = source.gather().await.unwrap();

        assert!(!records.is_empty());
        assert!(records.iter().all(|r| r.source == "Market Research"));
    }

    #[test]
    fn test_scores_stay_in_range() {
        for record in research_records(SOURCE_LABEL) {
            assert!((3..=5).contains(&record.engagement_score));
            assert!((1..=5).contains(&record.comment_count));
        }
    }
}
