//! Generator output shapes and brand-constraint enforcement.
//!
//! The wire format mirrors the schema the prompt asks the generator
//! for (`why`, `user_pain_point`), while the Rust field names describe
//! the content. The generator is an untrusted text producer, so an
//! AnalysisResult parsed from its output must pass through
//! [`AnalysisResult::enforce_brand_constraints`] before it is handed
//! to any caller.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Generator confidence in a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// A proposed new flavor for one of the allowed brands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub flavor: String,
    pub brand: String,
    pub product_type: String,

    /// One-sentence explanation of why the flavor works
    #[serde(rename = "why")]
    pub rationale: String,

    pub confidence: Confidence,

    /// The consumer problem this flavor addresses
    #[serde(rename = "user_pain_point")]
    pub pain_point: String,
}

/// A flavor idea the generator considered and discarded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectionItem {
    pub flavor: String,
    pub reason: String,
}

/// The single top-ranked recommendation of an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldenCandidate {
    pub flavor: String,
    pub brand: String,
    pub product_type: String,

    #[serde(rename = "why")]
    pub rationale: String,

    pub market_opportunity: String,
}

/// One complete analysis produced by the recommendation engine.
///
/// `golden_candidate` is absent only when the generator named a
/// disallowed brand for it and no allowed recommendation survived to
/// replace it with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub recommended: Vec<RecommendationItem>,
    pub rejected: Vec<RejectionItem>,
    pub golden_candidate: Option<GoldenCandidate>,
}

/// Check a generated brand name against the allow-list.
///
/// Matching is case-insensitive substring containment: an allow-list
/// entry "HK Vitals" accepts a generated brand "hk vitals premium".
/// The generator's output format is not fully controlled, so exact
/// comparison would drop valid items.
pub fn brand_allowed(brand: &str, allow_list: &[String]) -> bool {
    let brand = brand.to_lowercase();
    allow_list
        .iter()
        .any(|allowed| brand.contains(&allowed.to_lowercase()))
}

impl AnalysisResult {
    /// Enforce the brand allow-list on a freshly parsed result.
    ///
    /// Recommended items naming a disallowed brand are dropped. A
    /// golden candidate naming a disallowed brand is replaced by the
    /// first surviving recommended item (repackaged), or cleared when
    /// nothing survived.
    pub fn enforce_brand_constraints(&mut self, allow_list: &[String]) {
        let before = self.recommended.len();
        self.recommended
            .retain(|item| brand_allowed(&item.brand, allow_list));
        let dropped = before - self.recommended.len();
        if dropped > 0 {
            warn!(dropped, "Dropped recommendations for disallowed brands");
        }

        let golden_ok = self
            .golden_candidate
            .as_ref()
            .map(|g| brand_allowed(&g.brand, allow_list))
            .unwrap_or(false);

        if !golden_ok {
            match self.recommended.first() {
                Some(first) => {
                    debug!(
                        flavor = %first.flavor,
                        "Replacing disallowed golden candidate with top recommendation"
                    );
                    self.golden_candidate = Some(GoldenCandidate {
                        flavor: first.flavor.clone(),
                        brand: first.brand.clone(),
                        product_type: first.product_type.clone(),
                        rationale: first.rationale.clone(),
                        market_opportunity: format!(
                            "Strong demand from {} target audience",
                            first.brand
                        ),
                    });
                }
                None => {
                    warn!("No allowed recommendation available to repair golden candidate");
                    self.golden_candidate = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(flavor: &str, brand: &str) -> RecommendationItem {
        RecommendationItem {
            flavor: flavor.to_string(),
            brand: brand.to_string(),
            product_type: "Whey Protein".to_string(),
            rationale: "why".to_string(),
            confidence: Confidence::High,
            pain_point: "pain".to_string(),
        }
    }

    fn golden(brand: &str) -> GoldenCandidate {
        GoldenCandidate {
            flavor: "Kesar Pista".to_string(),
            brand: brand.to_string(),
            product_type: "Whey Protein".to_string(),
            rationale: "why".to_string(),
            market_opportunity: "first mover".to_string(),
        }
    }

    fn allow(brands: &[&str]) -> Vec<String> {
        brands.iter().map(|b| b.to_string()).collect()
    }

    #[test]
    fn test_brand_matching_is_case_insensitive_substring() {
        let list = allow(&["HK Vitals"]);
        assert!(brand_allowed("hk vitals premium", &list));
        assert!(brand_allowed("HK VITALS", &list));
        assert!(!brand_allowed("MuscleBlaze", &list));
    }

    #[test]
    fn test_disallowed_recommendations_are_dropped() {
        let mut result = AnalysisResult {
            recommended: vec![item("Mango Lassi", "MuscleBlaze"), item("Rose", "HK Vitals")],
            rejected: vec![],
            golden_candidate: Some(golden("MuscleBlaze")),
        };

        result.enforce_brand_constraints(&allow(&["MuscleBlaze"]));

        assert_eq!(result.recommended.len(), 1);
        assert_eq!(result.recommended[0].brand, "MuscleBlaze");
    }

    #[test]
    fn test_golden_repaired_from_first_survivor() {
        let mut result = AnalysisResult {
            recommended: vec![item("Masala Chai", "TrueBasics"), item("Kulfi", "TrueBasics")],
            rejected: vec![],
            golden_candidate: Some(golden("HK Vitals")),
        };

        result.enforce_brand_constraints(&allow(&["TrueBasics"]));

        let golden = result.golden_candidate.expect("golden should be repaired");
        assert_eq!(golden.flavor, "Masala Chai");
        assert_eq!(golden.brand, "TrueBasics");
        assert!(golden.market_opportunity.contains("TrueBasics"));
    }

    #[test]
    fn test_golden_cleared_when_nothing_survives() {
        let mut result = AnalysisResult {
            recommended: vec![item("Rose", "HK Vitals")],
            rejected: vec![],
            golden_candidate: Some(golden("HK Vitals")),
        };

        result.enforce_brand_constraints(&allow(&["MuscleBlaze"]));

        assert!(result.recommended.is_empty());
        assert!(result.golden_candidate.is_none());
    }

    #[test]
    fn test_valid_result_is_untouched() {
        let mut result = AnalysisResult {
            recommended: vec![item("Dark Cocoa", "MuscleBlaze")],
            rejected: vec![RejectionItem {
                flavor: "Vanilla".to_string(),
                reason: "too plain".to_string(),
            }],
            golden_candidate: Some(golden("MuscleBlaze")),
        };
        let expected = result.clone();

        result.enforce_brand_constraints(&allow(&["MuscleBlaze", "HK Vitals"]));

        assert_eq!(result, expected);
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "flavor": "Kesar Pista",
            "brand": "MuscleBlaze",
            "product_type": "Whey Protein",
            "why": "premium Indian flavor",
            "confidence": "High",
            "user_pain_point": "no Indian flavors"
        }"#;

        let item: RecommendationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.rationale, "premium Indian flavor");
        assert_eq!(item.pain_point, "no Indian flavors");
        assert_eq!(item.confidence, Confidence::High);
    }
}
