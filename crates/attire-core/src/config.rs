//! Engine configuration.
//!
//! All knobs carry documented defaults and can be overridden from a TOML
//! file. Empirically tuned scoring constants live in [`ScoringTunables`]
//! rather than being hardcoded in the scorer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{AttireResult, ConfigError};

/// Built-in default values.
pub mod defaults {
    /// Number of results returned per request.
    pub const RESULT_COUNT: usize = 6;
    /// Shortlist length per garment role.
    pub const PER_ROLE_LIMIT: usize = 12;
    /// Probability of a weighted-random draw instead of the greedy pick.
    pub const EPSILON: f64 = 0.15;
    /// Half-width of the uniform tie-breaking jitter.
    pub const JITTER: f64 = 0.15;

    /// Baseline weight for black/white/grey when no colour was hinted.
    pub const NEUTRAL_BIAS: f64 = 0.3;
    /// Baseline weight for beige when no colour was hinted.
    pub const NEUTRAL_BIAS_BEIGE: f64 = 0.2;
    /// Floor weight for fits the user did not ask for.
    pub const FIT_FLOOR: f64 = 0.2;
    /// Baseline fit distribution used without an explicit preference:
    /// oversized, regular, slim, cropped.
    pub const FIT_BASELINE: [f64; 4] = [0.4, 0.6, 0.4, 0.2];
}

/// Recommendation engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Target number of results (N).
    pub result_count: usize,
    /// Shortlist length per role.
    pub per_role_limit: usize,
    /// Diversity factor ε, clamped to [0, 0.5].
    pub epsilon: f64,
    /// Tie-breaking jitter half-width.
    pub jitter: f64,
    pub tunables: ScoringTunables,
}

/// Empirically tuned scoring constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTunables {
    pub neutral_bias: f64,
    pub neutral_bias_beige: f64,
    pub fit_floor: f64,
    /// Indexed by `Fit::index()`.
    pub fit_baseline: [f64; 4],
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            result_count: defaults::RESULT_COUNT,
            per_role_limit: defaults::PER_ROLE_LIMIT,
            epsilon: defaults::EPSILON,
            jitter: defaults::JITTER,
            tunables: ScoringTunables::default(),
        }
    }
}

impl Default for ScoringTunables {
    fn default() -> Self {
        Self {
            neutral_bias: defaults::NEUTRAL_BIAS,
            neutral_bias_beige: defaults::NEUTRAL_BIAS_BEIGE,
            fit_floor: defaults::FIT_FLOOR,
            fit_baseline: defaults::FIT_BASELINE,
        }
    }
}

impl EngineConfig {
    /// Load overrides from a TOML file; absent keys keep their defaults.
    pub fn from_toml_file(path: &Path) -> AttireResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: EngineConfig =
            toml::from_str(&raw).map_err(|source| ConfigError::Parse { source })?;
        config.clamp();
        Ok(config)
    }

    /// Clamp ε into its valid range and floor the counts.
    pub fn clamp(&mut self) {
        self.epsilon = self.epsilon.clamp(0.0, 0.5);
        self.jitter = self.jitter.max(0.0);
        self.result_count = self.result_count.max(1);
        self.per_role_limit = self.per_role_limit.max(1);
    }
}
