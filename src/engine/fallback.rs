//! Pre-authored fallback analysis.
//!
//! When the generation call fails, the CLI substitutes this canned
//! result so the presentation path always has something renderable.
//! This is a documented design fallback, not a hidden default; the
//! caller logs the substitution.

use crate::domain::{
    AnalysisResult, Confidence, GoldenCandidate, RecommendationItem, RejectionItem,
};

/// Static sample analysis used when the generation service fails
pub fn sample_analysis() -> AnalysisResult {
    AnalysisResult {
        recommended: vec![
            RecommendationItem {
                flavor: "Kesar Pista (Saffron Pistachio)".to_string(),
                brand: "MuscleBlaze".to_string(),
                product_type: "Whey Protein".to_string(),
                rationale: "Users are requesting authentic Indian premium flavors that feel luxurious and unique".to_string(),
                confidence: Confidence::High,
                pain_point: "Lack of Indian-inspired flavors in protein supplements".to_string(),
            },
            RecommendationItem {
                flavor: "Dark Cocoa".to_string(),
                brand: "MuscleBlaze".to_string(),
                product_type: "Whey Protein".to_string(),
                rationale: "Multiple complaints that current chocolate flavors are too sweet and artificial".to_string(),
                confidence: Confidence::High,
                pain_point: "Overly sweet chocolate protein causing taste fatigue".to_string(),
            },
            RecommendationItem {
                flavor: "Mango Lassi".to_string(),
                brand: "HK Vitals".to_string(),
                product_type: "Electrolyte Drink".to_string(),
                rationale: "Popular summer flavor request that combines hydration with familiar taste".to_string(),
                confidence: Confidence::Medium,
                pain_point: "Need refreshing summer flavors for post-workout hydration".to_string(),
            },
            RecommendationItem {
                flavor: "Masala Chai".to_string(),
                brand: "TrueBasics".to_string(),
                product_type: "Protein Powder".to_string(),
                rationale: "Users want innovative Indian flavors that break from boring coffee and vanilla".to_string(),
                confidence: Confidence::High,
                pain_point: "Repetitive flavor options in daily supplements".to_string(),
            },
            RecommendationItem {
                flavor: "Blueberry (Natural Extract)".to_string(),
                brand: "HK Vitals".to_string(),
                product_type: "Gummies".to_string(),
                rationale: "Trending flavor but users complain most brands make it too artificial".to_string(),
                confidence: Confidence::Medium,
                pain_point: "Artificial-tasting blueberry supplements".to_string(),
            },
        ],
        rejected: vec![
            RejectionItem {
                flavor: "Salted Caramel".to_string(),
                reason: "Market is already oversaturated with this flavor; low differentiation opportunity".to_string(),
            },
            RejectionItem {
                flavor: "Vanilla".to_string(),
                reason: "Too plain and boring according to user feedback; needs enhancement like Vanilla Honey".to_string(),
            },
            RejectionItem {
                flavor: "Green Apple (Artificial)".to_string(),
                reason: "Users specifically complain about chemical taste in artificial green apple flavors".to_string(),
            },
            RejectionItem {
                flavor: "Regular Coffee".to_string(),
                reason: "Standard coffee flavor is oversaturated; users want innovative variants".to_string(),
            },
            RejectionItem {
                flavor: "Strawberry".to_string(),
                reason: "Generic strawberry without differentiation won't stand out in crowded market".to_string(),
            },
        ],
        golden_candidate: Some(GoldenCandidate {
            flavor: "Kesar Pista (Saffron Pistachio)".to_string(),
            brand: "MuscleBlaze".to_string(),
            product_type: "Biozyme Whey Protein".to_string(),
            rationale: "Premium Indian flavor that doesn't exist in the market, highly requested by users who want authentic tastes".to_string(),
            market_opportunity: "First-mover advantage in Indian fusion premium protein flavors with strong cultural resonance".to_string(),
        }),
    }
}
