//! Flavor keyword intelligence.
//!
//! - `table`: the canonical flavor synonym table
//! - `normalizer`: free text -> canonical flavor mentions
//! - `aggregator`: corpus -> ranked flavor frequency table

pub mod aggregator;
pub mod normalizer;
pub mod table;

pub use aggregator::aggregate;
pub use normalizer::normalize;
pub use table::SynonymTable;
