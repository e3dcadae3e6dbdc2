//! Remote reply generation capability.
//!
//! The shaper depends on exactly one external capability: turn a prompt into
//! raw model text with a structured JSON payload embedded somewhere in it.
//! [`ReplyGenerator`] abstracts that capability so the core and its tests
//! have no dependency on a live provider; [`api::ApiGenerator`] is the
//! production implementation.

pub mod api;

use async_trait::async_trait;

/// Errors reported by a generation attempt.
///
/// The shaper absorbs both kinds and substitutes fallback content; the
/// distinction exists for diagnostics only.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Transport, authentication, or quota failure reaching the provider.
    #[error("generator unavailable: {0}")]
    Unavailable(String),

    /// The provider accepted the request but reported a failure, or the
    /// response body was unusable.
    #[error("remote generation failed: {0}")]
    Remote(String),
}

/// Trait for remote structured-reply generators.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    /// Generator name for logging (e.g. `"api"`).
    fn name(&self) -> &str;

    /// Produce raw model text for the given prompt.
    ///
    /// The returned text is expected to contain a brace-delimited JSON
    /// payload, possibly wrapped in prose. Extraction and validation are the
    /// caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Unavailable`] on transport/auth/quota
    /// failure and [`GeneratorError::Remote`] on provider-reported failure.
    async fn generate_structured_reply(&self, prompt: &str) -> Result<String, GeneratorError>;
}
