//! flavorscout - Flavor market intelligence pipeline
//!
//! Aggregates consumer text about product flavors, extracts
//! normalized flavor mentions, and asks a hosted language model to
//! propose new flavor ideas constrained to an allowed brand set.
//!
//! # Architecture
//!
//! Two independent pipelines share one corpus:
//! - corpus -> normalizer -> aggregator (ranked flavor frequencies)
//! - corpus sample -> recommendation engine -> validated analysis
//!
//! # Modules
//!
//! - `adapters`: generation service integrations (Groq)
//! - `corpus`: source strategies with per-source fallback
//! - `flavors`: synonym table, normalizer, aggregator
//! - `engine`: prompt construction, JSON extraction, brand repair
//! - `domain`: data structures (TextRecord, AnalysisResult)
//! - `cli`: command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Ranked flavor keyword table from the sample corpus
//! flavorscout trends --sample
//!
//! # Full analysis against the live sources (needs GROQ_API_KEY)
//! flavorscout analyze
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod domain;
pub mod engine;
pub mod flavors;

// Re-export main types at crate root for convenience
pub use adapters::{GenerationError, Generator, GroqClient};
pub use config::{BrandProfile, Config};
pub use corpus::{CorpusProvider, SourceError, SourceStrategy};
pub use domain::{AnalysisResult, GoldenCandidate, RecommendationItem, RejectionItem, TextRecord};
pub use engine::{AnalysisError, RecommendationEngine};
pub use flavors::SynonymTable;
