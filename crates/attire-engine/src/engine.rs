//! RecommendEngine: orchestrates the full scoring pipeline.
//!
//! intent → weights → per-role shortlists → assembly → diversity sampling.

use attire_core::catalog::CatalogItem;
use attire_core::errors::{AttireResult, EngineError};
use attire_core::vocab::Role;
use attire_core::{EngineConfig, PromptIntent};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::assembler::{self, PairCoefficients, RankedOutfit};
use crate::sampler;
use crate::scorer::ScoreCoefficients;
use crate::selector;
use crate::weights;

/// The main recommendation engine. One instance serves many requests; all
/// per-request state lives in the call.
pub struct RecommendEngine {
    config: EngineConfig,
    coef: ScoreCoefficients,
    pair_coef: PairCoefficients,
}

impl RecommendEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            coef: ScoreCoefficients::default(),
            pair_coef: PairCoefficients::default(),
        }
    }

    /// Run the full pipeline for one resolved intent.
    ///
    /// The RNG drives tie-breaking jitter and epsilon draws; pass a seeded
    /// generator for reproducible output.
    pub fn recommend<'a, R: Rng + ?Sized>(
        &self,
        catalog: &'a [CatalogItem],
        intent: &PromptIntent,
        rng: &mut R,
    ) -> AttireResult<Vec<RankedOutfit<'a>>> {
        if intent.required_categories.is_empty() {
            return Err(EngineError::EmptyIntent.into());
        }

        let weights = weights::build_weights(intent, &self.config.tunables);
        debug!(
            roles = ?intent.required_categories,
            single = intent.is_single(),
            "weights built"
        );

        // Shortlist each required role in fixed role order. A role with no
        // catalog items degrades to a partial outfit rather than failing.
        let mut shortlists: Vec<(Role, Vec<&'a CatalogItem>)> = Vec::new();
        for role in Role::ALL {
            if !intent.required_categories.contains(&role) {
                continue;
            }
            let shortlist = selector::select_candidates(
                catalog,
                role,
                intent,
                &weights,
                &self.coef,
                self.config.per_role_limit,
            );
            if shortlist.is_empty() {
                warn!(%role, "no catalog items for required role, dropping it");
                continue;
            }
            debug!(%role, candidates = shortlist.len(), "shortlist selected");
            shortlists.push((role, shortlist));
        }

        if shortlists.is_empty() {
            return Err(EngineError::NoCandidates.into());
        }

        let candidates = assembler::assemble(
            &shortlists,
            &weights,
            &self.coef,
            &self.pair_coef,
            intent.is_single(),
            self.config.jitter,
            rng,
        );
        if candidates.is_empty() {
            return Err(EngineError::NoCandidates.into());
        }
        debug!(candidates = candidates.len(), "assembly complete");

        let results = sampler::sample_diverse(
            candidates,
            self.config.result_count,
            self.config.epsilon,
            rng,
        );
        if results.is_empty() {
            return Err(EngineError::NoCandidates.into());
        }

        info!(results = results.len(), "recommendation complete");
        Ok(results)
    }
}

impl Default for RecommendEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
