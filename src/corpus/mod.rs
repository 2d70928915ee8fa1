//! Corpus gathering with per-source fallback.
//!
//! Sources are a ranked list of [`SourceStrategy`] implementations.
//! Each strategy either returns records or a typed [`SourceError`];
//! on failure (or an empty result) the provider substitutes that
//! strategy's deterministic fallback records instead of propagating
//! the error, so downstream stages always receive a corpus as long as
//! one strategy is reachable. The static sample strategy never fails,
//! which makes the guarantee unconditional when it is in the list.

pub mod amazon;
pub mod reddit;
pub mod research;
pub mod sample;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::TextRecord;

pub use amazon::AmazonSource;
pub use reddit::RedditSource;
pub use research::MarketResearchSource;
pub use sample::SampleSource;

/// Per-source failure modes. All of these are recovered locally by
/// fallback substitution; none reaches the pipeline caller.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source returned HTTP status {0}")]
    Http(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode source payload: {0}")]
    Decode(String),

    #[error("source returned no usable records")]
    Empty,
}

/// One corpus source in the provider's ranked list
#[async_trait]
pub trait SourceStrategy: Send + Sync {
    /// Human-readable strategy name for logging
    fn name(&self) -> &str;

    /// Attempt to gather live records
    async fn gather(&self) -> Result<Vec<TextRecord>, SourceError>;

    /// Deterministic synthetic records substituted when `gather`
    /// fails or comes back empty. Labels carry a "(fallback)" marker.
    fn fallback(&self) -> Vec<TextRecord>;
}

/// Ordered collection of source strategies
pub struct CorpusProvider {
    strategies: Vec<Box<dyn SourceStrategy>>,
}

impl CorpusProvider {
    pub fn new(strategies: Vec<Box<dyn SourceStrategy>>) -> Self {
        Self { strategies }
    }

    /// Build the default ranked source list from config: Amazon search
    /// terms, Reddit communities, curated market research, and the
    /// static sample corpus appended last as the guaranteed-success
    /// strategy.
    pub fn from_config(config: &Config) -> Self {
        let mut strategies: Vec<Box<dyn SourceStrategy>> = Vec::new();

        if !config.sources.amazon_terms.is_empty() {
            strategies.push(Box::new(AmazonSource::new(
                config.sources.amazon_terms.clone(),
                config.request_timeout(),
            )));
        }

        if !config.sources.subreddits.is_empty() {
            strategies.push(Box::new(RedditSource::new(
                config.sources.subreddits.clone(),
                config.sources.post_limit,
                config.request_timeout(),
            )));
        }

        strategies.push(Box::new(MarketResearchSource::new()));
        strategies.push(Box::new(SampleSource::new()));

        Self::new(strategies)
    }

    /// Gather from every strategy in order, substituting fallback
    /// records per failed source. Insertion order of the corpus is
    /// the order in which strategies were queried.
    pub async fn gather(&self) -> Vec<TextRecord> {
        let mut corpus = Vec::new();

        for strategy in &self.strategies {
            match strategy.gather().await {
                Ok(records) if !records.is_empty() => {
                    debug!(
                        source = strategy.name(),
                        records = records.len(),
                        "Source gathered"
                    );
                    corpus.extend(records);
                }
                Ok(_) => {
                    warn!(
                        source = strategy.name(),
                        "Source returned no records, substituting fallback"
                    );
                    corpus.extend(strategy.fallback());
                }
                Err(err) => {
                    warn!(
                        source = strategy.name(),
                        error = %err,
                        "Source failed, substituting fallback"
                    );
                    corpus.extend(strategy.fallback());
                }
            }
        }

        info!(records = corpus.len(), "Corpus gathered");
        corpus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    #[async_trait]
    impl SourceStrategy for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        async fn gather(&self) -> Result<Vec<TextRecord>, SourceError> {
            Err(SourceError::Http(503))
        }

        fn fallback(&self) -> Vec<TextRecord> {
            vec![TextRecord::new("synthetic", "failing (fallback)", 0, 0)]
        }
    }

    struct EmptySource;

    #[async_trait]
    impl SourceStrategy for EmptySource {
        fn name(&self) -> &str {
            "empty"
        }

        async fn gather(&self) -> Result<Vec<TextRecord>, SourceError> {
            Ok(vec![])
        }

        fn fallback(&self) -> Vec<TextRecord> {
            vec![TextRecord::new("synthetic", "empty (fallback)", 0, 0)]
        }
    }

    #[tokio::test]
    async fn test_failed_source_substitutes_fallback() {
        let provider = CorpusProvider::new(vec![Box::new(FailingSource)]);
        let corpus = provider.gather().await;

        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus[0].source, "failing (fallback)");
    }

    #[tokio::test]
    async fn test_empty_result_substitutes_fallback() {
        let provider = CorpusProvider::new(vec![Box::new(EmptySource)]);
        let corpus = provider.gather().await;

        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus[0].source, "empty (fallback)");
    }

    #[tokio::test]
    async fn test_sources_queried_in_order() {
        let provider = CorpusProvider::new(vec![
            Box::new(FailingSource),
            Box::new(SampleSource::new()),
        ]);
        let corpus = provider.gather().await;

        assert_eq!(corpus[0].source, "failing (fallback)");
        assert!(corpus.len() > 1);
    }

    #[tokio::test]
    async fn test_no_strategies_yields_empty_corpus() {
        let provider = CorpusProvider::new(vec![]);
        assert!(provider.gather().await.is_empty());
    }
}
