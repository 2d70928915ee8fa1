//! Command-line interface for flavorscout.
//!
//! Provides commands for gathering the corpus, printing the ranked
//! flavor trend table, and running the full LLM-backed analysis.
//! This is the presentation caller of the core pipeline: it owns the
//! fallback-to-sample-analysis behavior when generation fails.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use uuid::Uuid;

use crate::adapters::GroqClient;
use crate::config::Config;
use crate::corpus::{CorpusProvider, SampleSource, SourceStrategy};
use crate::domain::{AnalysisResult, Confidence, TextRecord};
use crate::engine::{sample_analysis, AnalysisError, RecommendationEngine};
use crate::flavors::{aggregate, SynonymTable};

/// Env var holding the generation service API key
const API_KEY_ENV: &str = "GROQ_API_KEY";

/// flavorscout - Flavor market intelligence pipeline
#[derive(Parser, Debug)]
#[command(name = "flavorscout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides FLAVORSCOUT_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Gather the corpus and print the records
    Gather {
        /// Use the static sample corpus instead of live sources
        #[arg(long)]
        sample: bool,

        /// Maximum number of records to print
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Print the ranked flavor keyword table
    Trends {
        /// Use the static sample corpus instead of live sources
        #[arg(long)]
        sample: bool,

        /// Number of flavors to show (defaults to config limits.top_n)
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Run the full flavor recommendation analysis
    Analyze {
        /// Use the static sample corpus instead of live sources
        #[arg(long)]
        sample: bool,

        /// Restrict analysis to a comma-separated subset of the
        /// configured brands
        #[arg(short, long)]
        brands: Option<String>,
    },
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;

        match self.command {
            Commands::Gather { sample, limit } => gather(&config, sample, limit).await,
            Commands::Trends { sample, top } => trends(&config, sample, top).await,
            Commands::Analyze { sample, brands } => analyze(&config, sample, brands).await,
        }
    }
}

/// Build the corpus from the configured sources, or the sample set
async fn build_corpus(config: &Config, sample_only: bool) -> Vec<TextRecord> {
    let provider = if sample_only {
        CorpusProvider::new(vec![Box::new(SampleSource::new()) as Box<dyn SourceStrategy>])
    } else {
        CorpusProvider::from_config(config)
    };
    provider.gather().await
}

async fn gather(config: &Config, sample_only: bool, limit: usize) -> Result<()> {
    let corpus = build_corpus(config, sample_only).await;

    println!("Gathered {} records", corpus.len());
    for record in corpus.iter().take(limit) {
        println!(
            "  [{}] score={} comments={} | {}",
            record.source, record.engagement_score, record.comment_count, record.text
        );
    }
    if corpus.len() > limit {
        println!("  ... and {} more", corpus.len() - limit);
    }

    Ok(())
}

async fn trends(config: &Config, sample_only: bool, top: Option<usize>) -> Result<()> {
    let corpus = build_corpus(config, sample_only).await;
    let table = SynonymTable::builtin();
    let top_n = top.unwrap_or(config.limits.top_n);

    let ranked = aggregate(&table, &corpus, top_n);
    if ranked.is_empty() {
        println!("No flavor keywords detected in the corpus.");
        return Ok(());
    }

    println!("Top flavor keywords ({} records analyzed):", corpus.len());
    for (rank, (flavor, count)) in ranked.iter().enumerate() {
        println!("  {:>2}. {:<16} {}", rank + 1, flavor, count);
    }

    Ok(())
}

/// Resolve the brand allow-list, honoring an optional CLI subset
fn resolve_brands(config: &Config, subset: Option<String>) -> Result<Vec<String>> {
    let configured = config.brand_names();
    let Some(subset) = subset else {
        return Ok(configured);
    };

    let mut selected = Vec::new();
    for name in subset.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match configured.iter().find(|b| b.eq_ignore_ascii_case(name)) {
            Some(brand) => selected.push(brand.clone()),
            None => bail!(
                "Unknown brand '{}' (configured brands: {})",
                name,
                configured.join(", ")
            ),
        }
    }
    if selected.is_empty() {
        bail!("Brand filter selected no brands");
    }
    Ok(selected)
}

async fn analyze(config: &Config, sample_only: bool, brands: Option<String>) -> Result<()> {
    let allow_list = resolve_brands(config, brands)?;

    let api_key = std::env::var(API_KEY_ENV)
        .with_context(|| format!("{API_KEY_ENV} not set; required for the analyze command"))?;
    let generator = GroqClient::new(api_key)
        .with_base_url(&config.api.base_url)
        .with_model(&config.api.model);

    let run_id = Uuid::new_v4();
    info!(%run_id, brands = %allow_list.join(", "), "Starting analysis run");

    let corpus = build_corpus(config, sample_only).await;
    let engine = RecommendationEngine::from_config(config);

    let analysis = match engine.recommend(&corpus, &allow_list, &generator).await {
        Ok(analysis) => analysis,
        Err(AnalysisError::EmptyCorpus) => {
            bail!("Corpus is empty even after fallback; nothing to analyze");
        }
        Err(AnalysisError::Generation(err)) => {
            warn!(%run_id, error = %err, "Generation failed, using sample analysis");
            println!("(generation failed: {err}; showing pre-authored sample analysis)\n");
            sample_analysis()
        }
    };

    render_analysis(&analysis);

    // The trend table shares the corpus but not the generator, so it
    // is printed even when generation fell back.
    println!();
    let table = SynonymTable::builtin();
    let ranked = aggregate(&table, &corpus, config.limits.top_n);
    if !ranked.is_empty() {
        println!("Flavor mentions backing this analysis:");
        for (flavor, count) in &ranked {
            println!("  {flavor}: {count}");
        }
    }

    Ok(())
}

fn confidence_label(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::High => "High",
        Confidence::Medium => "Medium",
        Confidence::Low => "Low",
    }
}

fn render_analysis(analysis: &AnalysisResult) {
    println!("=== Golden Candidate ===");
    match &analysis.golden_candidate {
        Some(golden) => {
            println!("{} — {} ({})", golden.flavor, golden.brand, golden.product_type);
            println!("  Why: {}", golden.rationale);
            println!("  Market opportunity: {}", golden.market_opportunity);
        }
        None => {
            println!("(no golden candidate survived brand validation)");
        }
    }

    println!("\n=== Recommended ({}) ===", analysis.recommended.len());
    for (i, item) in analysis.recommended.iter().enumerate() {
        println!(
            "{}. {} — {} ({}) [{}]",
            i + 1,
            item.flavor,
            item.brand,
            item.product_type,
            confidence_label(item.confidence)
        );
        println!("   Why: {}", item.rationale);
        println!("   Solves: {}", item.pain_point);
    }

    println!("\n=== Rejected ({}) ===", analysis.rejected.len());
    for (i, item) in analysis.rejected.iter().enumerate() {
        println!("{}. {} — {}", i + 1, item.flavor, item.reason);
    }
}
