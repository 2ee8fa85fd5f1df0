//! Subsystem error enums unified under [`AttireError`].

use thiserror::Error;

/// Result alias used across the workspace.
pub type AttireResult<T> = Result<T, AttireError>;

/// Top-level error for the Attire workspace.
#[derive(Debug, Error)]
pub enum AttireError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Intent(#[from] IntentError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Catalog loading and validation errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog item {id} has {count} colours, expected 1..=2")]
    ColourCount { id: String, count: usize },

    #[error("catalog is empty")]
    Empty,
}

/// Config override loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config is not valid TOML: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
    },
}

/// Intent-resolution boundary errors. These are all recoverable: the
/// resolver falls back to the heuristic parser instead of failing the run.
#[derive(Debug, Error)]
pub enum IntentError {
    #[error("oracle unreachable: {reason}")]
    OracleUnreachable { reason: String },

    #[error("oracle returned {status}: {body}")]
    OracleStatus { status: u16, body: String },

    #[error("oracle response carries no JSON object")]
    NoJsonPayload,
}

/// Recommendation engine errors.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no candidates for any requested role")]
    NoCandidates,

    #[error("intent requires no categories")]
    EmptyIntent,
}
