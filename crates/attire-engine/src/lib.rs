//! # attire-engine
//!
//! The scoring core: converts a resolved intent into ranked, non-duplicate
//! outfit recommendations. Pipeline: WeightBuilder → per-role
//! CandidateSelector (staged relaxation) → OutfitAssembler (pairwise
//! compatibility) → DiversitySampler (epsilon-greedy).

pub mod assembler;
pub mod engine;
pub mod sampler;
pub mod scorer;
pub mod selector;
pub mod weights;

pub use assembler::{Outfit, PairCoefficients, RankedOutfit};
pub use engine::RecommendEngine;
pub use scorer::ScoreCoefficients;
pub use weights::ContextWeights;
