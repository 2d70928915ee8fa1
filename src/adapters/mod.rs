//! Adapter interfaces for external generation services.
//!
//! The recommendation engine talks to a text-generation service
//! through the [`Generator`] trait; [`GroqClient`] is the hosted
//! implementation. Generator output is untrusted text and is always
//! parsed and validated by the caller, never trusted structurally.

pub mod groq;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use groq::GroqClient;

/// Failure modes of a generation call, preserved up to the caller so
/// it can choose user messaging. The engine takes no corrective
/// action beyond reporting; retry and fallback are caller decisions.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("malformed generator response: {0}")]
    Malformed(String),

    #[error("no JSON object found in generator response")]
    NoJsonObject,

    #[error("generator response does not match expected schema: {0}")]
    SchemaMismatch(String),

    #[error("generation service error: {0}")]
    Remote(String),
}

/// A blocking text-completion service
#[async_trait]
pub trait Generator: Send + Sync {
    /// Human-readable service name
    fn name(&self) -> &str;

    /// Complete a prompt, bounded by `timeout`
    async fn complete(&self, prompt: &str, timeout: Duration) -> Result<String, GenerationError>;
}
