//! Brand-constrained flavor recommendation engine.
//!
//! One call = one shot: sample the corpus head, build the prompt,
//! invoke the generator, extract and validate the JSON, repair brand
//! constraint violations. No retry logic lives here; on failure the
//! caller decides between retrying and the canned fallback analysis.

pub mod extract;
pub mod fallback;
pub mod prompt;

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use crate::adapters::{GenerationError, Generator};
use crate::config::{BrandProfile, Config};
use crate::domain::{AnalysisResult, TextRecord};

pub use extract::extract_json_object;
pub use fallback::sample_analysis;
pub use prompt::build_prompt;

/// Why an analysis run could not produce a result
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The corpus had no records to sample; recommendation refuses to
    /// run rather than prompting over nothing. Distinct from
    /// generation failures so callers can message it differently.
    #[error("corpus contains no records to sample")]
    EmptyCorpus,

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Recommendation engine configuration and entry point
pub struct RecommendationEngine {
    profiles: Vec<BrandProfile>,
    sample_size: usize,
    truncate_chars: usize,
    request_timeout: Duration,
}

impl RecommendationEngine {
    pub fn new(
        profiles: Vec<BrandProfile>,
        sample_size: usize,
        truncate_chars: usize,
        request_timeout: Duration,
    ) -> Self {
        Self {
            profiles,
            sample_size,
            truncate_chars,
            request_timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.brands.clone(),
            config.limits.sample_size,
            config.limits.truncate_chars,
            config.request_timeout(),
        )
    }

    /// Run one analysis over the head of the corpus.
    ///
    /// Recommendations are based on a bounded sample (the first
    /// `sample_size` records, each truncated to `truncate_chars`
    /// characters), not the exhaustive corpus; that is a deliberate
    /// precision/cost trade-off. The returned result already satisfies
    /// the brand allow-list invariant. Not idempotent: the remote
    /// generator is non-deterministic.
    pub async fn recommend(
        &self,
        records: &[TextRecord],
        allow_list: &[String],
        generator: &dyn Generator,
    ) -> Result<AnalysisResult, AnalysisError> {
        if records.is_empty() {
            return Err(AnalysisError::EmptyCorpus);
        }

        let samples: Vec<String> = records
            .iter()
            .take(self.sample_size)
            .map(|r| truncate_chars(&r.text, self.truncate_chars).to_string())
            .collect();

        let prompt = build_prompt(&self.profiles, allow_list, &samples);
        debug!(
            samples = samples.len(),
            prompt_chars = prompt.len(),
            "Prompt constructed"
        );

        let raw = generator.complete(&prompt, self.request_timeout).await?;
        let mut analysis = parse_analysis(&raw)?;

        analysis.enforce_brand_constraints(allow_list);
        info!(
            recommended = analysis.recommended.len(),
            rejected = analysis.rejected.len(),
            golden = analysis.golden_candidate.is_some(),
            "Analysis validated"
        );

        Ok(analysis)
    }
}

/// Two-phase parse of raw generator output: locate the first balanced
/// JSON object, then validate it against the analysis schema.
fn parse_analysis(raw: &str) -> Result<AnalysisResult, GenerationError> {
    let span = extract_json_object(raw).ok_or(GenerationError::NoJsonObject)?;

    let value: serde_json::Value = serde_json::from_str(span)
        .map_err(|e| GenerationError::Malformed(e.to_string()))?;

    let analysis: AnalysisResult = serde_json::from_value(value)
        .map_err(|e| GenerationError::SchemaMismatch(e.to_string()))?;

    // Option<GoldenCandidate> deserializes a missing field as None,
    // so presence has to be checked explicitly before repair.
    if analysis.golden_candidate.is_none() {
        return Err(GenerationError::SchemaMismatch(
            "missing golden_candidate".to_string(),
        ));
    }

    Ok(analysis)
}

/// Truncate to at most `max` characters on a char boundary
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
