//! Configuration for flavorscout.
//!
//! Configuration sources (highest priority first):
//! 1. FLAVORSCOUT_CONFIG environment variable (explicit file path)
//! 2. flavorscout.yaml found in the current directory or a parent
//! 3. Built-in defaults
//!
//! Every numeric knob must be a positive integer and the brand list
//! must be non-empty; [`Config::validate`] enforces this after load.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Env var naming an explicit config file
pub const CONFIG_ENV: &str = "FLAVORSCOUT_CONFIG";

/// Config file name searched for in cwd and parents
pub const CONFIG_FILE_NAME: &str = "flavorscout.yaml";

/// A brand the recommendation engine is allowed to propose flavors
/// for, with the audience/category knowledge embedded in the prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandProfile {
    pub name: String,
    pub audience: String,
    pub categories: Vec<String>,
}

/// Live source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Amazon search terms, one query per term
    #[serde(default = "default_amazon_terms")]
    pub amazon_terms: Vec<String>,

    /// Subreddits to pull hot listings from
    #[serde(default = "default_subreddits")]
    pub subreddits: Vec<String>,

    /// Posts requested per subreddit
    #[serde(default = "default_post_limit")]
    pub post_limit: usize,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            amazon_terms: default_amazon_terms(),
            subreddits: default_subreddits(),
            post_limit: default_post_limit(),
        }
    }
}

/// Pipeline sizing knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Records sampled from the head of the corpus for the prompt
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// Per-record character budget when embedding text in the prompt
    #[serde(default = "default_truncate_chars")]
    pub truncate_chars: usize,

    /// Entries in the aggregated flavor frequency table
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Timeout for every network-facing call, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            truncate_chars: default_truncate_chars(),
            top_n: default_top_n(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

/// Generation service configuration. The API key is never stored in
/// the file; it comes from the GROQ_API_KEY environment variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
        }
    }
}

/// Resolved configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Brand allow-list with prompt domain knowledge. Order matters:
    /// it is the order brands appear in the prompt.
    #[serde(default = "default_brands")]
    pub brands: Vec<BrandProfile>,

    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub limits: LimitsConfig,

    #[serde(default)]
    pub api: ApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brands: default_brands(),
            sources: SourcesConfig::default(),
            limits: LimitsConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

fn default_amazon_terms() -> Vec<String> {
    ["whey protein", "mass gainer", "pre workout supplement", "multivitamin"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_subreddits() -> Vec<String> {
    ["fitness", "supplements", "nutrition"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_post_limit() -> usize {
    20
}
fn default_sample_size() -> usize {
    20
}
fn default_truncate_chars() -> usize {
    200
}
fn default_top_n() -> usize {
    15
}
fn default_request_timeout() -> u64 {
    15
}
fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}
fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_brands() -> Vec<BrandProfile> {
    vec![
        BrandProfile {
            name: "MuscleBlaze".to_string(),
            audience: "Hardcore gym supplements for serious athletes".to_string(),
            categories: vec![
                "Whey Protein".to_string(),
                "Mass Gainers".to_string(),
                "Pre-workout".to_string(),
            ],
        },
        BrandProfile {
            name: "HK Vitals".to_string(),
            audience: "Wellness and lifestyle supplements for everyday health".to_string(),
            categories: vec![
                "Multivitamins".to_string(),
                "Omega-3".to_string(),
                "Immunity boosters".to_string(),
            ],
        },
        BrandProfile {
            name: "TrueBasics".to_string(),
            audience: "Science-backed nutrition for holistic wellness".to_string(),
            categories: vec![
                "Targeted supplements".to_string(),
                "Functional nutrition".to_string(),
            ],
        },
    ]
}

/// Find flavorscout.yaml by searching the current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.exists() {
            return Some(candidate);
        }

        if !current.pop() {
            return None;
        }
    }
}

impl Config {
    /// Load configuration: explicit path > env var > discovered file >
    /// defaults. The result is always validated.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => match std::env::var(CONFIG_ENV) {
                Ok(p) => Some(PathBuf::from(p)),
                Err(_) => find_config_file(),
            },
        };

        let config = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading config file");
                Self::from_file(&path)?
            }
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Enforce configuration invariants
    pub fn validate(&self) -> Result<()> {
        if self.brands.is_empty() {
            bail!("Brand allow-list cannot be empty");
        }
        if self.brands.iter().any(|b| b.name.trim().is_empty()) {
            bail!("Brand names cannot be empty");
        }
        if self.limits.sample_size == 0 {
            bail!("limits.sample_size must be a positive integer");
        }
        if self.limits.truncate_chars == 0 {
            bail!("limits.truncate_chars must be a positive integer");
        }
        if self.limits.top_n == 0 {
            bail!("limits.top_n must be a positive integer");
        }
        if self.limits.request_timeout_seconds == 0 {
            bail!("limits.request_timeout_seconds must be a positive integer");
        }
        if self.sources.post_limit == 0 {
            bail!("sources.post_limit must be a positive integer");
        }
        Ok(())
    }

    /// Ordered brand allow-list (names only)
    pub fn brand_names(&self) -> Vec<String> {
        self.brands.iter().map(|b| b.name.clone()).collect()
    }

    /// Bounded wait applied to every network-facing call
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.limits.request_timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.brand_names(),
            vec!["MuscleBlaze", "HK Vitals", "TrueBasics"]
        );
        assert_eq!(config.limits.sample_size, 20);
        assert_eq!(config.limits.truncate_chars, 200);
    }

    #[test]
    fn test_empty_brand_list_rejected() {
        let config = Config {
            brands: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_knobs_rejected() {
        let mut config = Config::default();
        config.limits.sample_size = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.limits.top_n = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.sources.post_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
limits:
  sample_size: 5
sources:
  subreddits: ["fitness"]
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.limits.sample_size, 5);
        assert_eq!(config.limits.truncate_chars, 200);
        assert_eq!(config.sources.subreddits, vec!["fitness"]);
        assert_eq!(config.brands.len(), 3);
    }

    #[test]
    fn test_load_from_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
brands:
  - name: MuscleBlaze
    audience: athletes
    categories: ["Whey Protein"]
limits:
  top_n: 7
"#
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.brands.len(), 1);
        assert_eq!(config.limits.top_n, 7);
    }

    #[test]
    fn test_invalid_file_rejected_on_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "limits:\n  sample_size: 0").unwrap();
        assert!(Config::load(Some(file.path())).is_err());
    }
}
