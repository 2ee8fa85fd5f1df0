//! # attire-intent
//!
//! The intent-resolution boundary: asks the language-model oracle for a
//! structured intent, sanitizes its output against the closed vocabularies,
//! and repairs it from a deterministic heuristic parse of the same prompt.
//! The oracle failing is never fatal; the fallback is authoritative then.

pub mod fallback;
pub mod oracle;
pub mod resolver;
pub mod sanitize;

pub use oracle::HttpOracle;
pub use resolver::{merge_intents, IntentResolver};
