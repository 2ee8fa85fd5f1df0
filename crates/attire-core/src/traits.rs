//! Seam traits implemented by boundary crates.

use crate::errors::AttireResult;

/// External language-model oracle that turns a free-text prompt into a
/// structured intent. Implementations return the raw completion text; the
/// resolver owns extraction and sanitization.
pub trait IIntentOracle: Send + Sync {
    /// One-shot completion for the given prompt. An `Err` here is always
    /// recoverable: the resolver falls back to the heuristic parser.
    fn complete(&self, prompt: &str) -> AttireResult<String>;

    /// Human-readable identifier for logging.
    fn name(&self) -> &str;
}
