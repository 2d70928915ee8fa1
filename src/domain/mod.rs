//! Data structures for the flavor intelligence pipeline.
//!
//! - `record`: raw corpus records gathered from sources
//! - `analysis`: generator output shapes and brand-constraint repair

pub mod analysis;
pub mod record;

pub use analysis::{
    AnalysisResult, Confidence, GoldenCandidate, RecommendationItem, RejectionItem,
};
pub use record::TextRecord;
