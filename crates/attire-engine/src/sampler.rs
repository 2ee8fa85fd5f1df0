//! Epsilon-greedy diversity sampling over the top-scoring band.
//!
//! With probability ε a candidate is drawn by score-weighted random
//! selection, otherwise the best remaining one is taken. Duplicate item-set
//! signatures are skipped; drawn candidates leave the band either way, so
//! the loop always terminates.

use std::collections::HashSet;

use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::Rng;
use tracing::debug;

use crate::assembler::RankedOutfit;

/// Band width multiplier: sampling draws from the top `3N` candidates.
const BAND_FACTOR: usize = 3;
/// Keeps every sampling weight strictly positive.
const MIN_WEIGHT: f64 = 1e-3;

/// Select up to `n` distinct results from the scored candidates.
/// Fewer than `n` results is a valid outcome, not an error.
pub fn sample_diverse<'a, R: Rng + ?Sized>(
    mut candidates: Vec<RankedOutfit<'a>>,
    n: usize,
    epsilon: f64,
    rng: &mut R,
) -> Vec<RankedOutfit<'a>> {
    if n == 0 || candidates.is_empty() {
        return Vec::new();
    }

    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    let band_size = (BAND_FACTOR * n).max(n);
    candidates.truncate(band_size);

    let mut accepted: Vec<RankedOutfit<'a>> = Vec::with_capacity(n);
    let mut seen: HashSet<String> = HashSet::new();

    while accepted.len() < n && !candidates.is_empty() {
        let idx = if epsilon > 0.0 && rng.gen::<f64>() < epsilon {
            weighted_draw(&candidates, rng)
        } else {
            // Band stays sorted descending, so the head is the best left.
            0
        };
        let candidate = candidates.remove(idx);
        if seen.insert(candidate.outfit.signature()) {
            accepted.push(candidate);
        }
    }

    debug!(accepted = accepted.len(), requested = n, "diversity sampling complete");
    accepted
}

/// Score-weighted random index; scores are shifted so the band minimum is
/// strictly positive.
fn weighted_draw<R: Rng + ?Sized>(band: &[RankedOutfit<'_>], rng: &mut R) -> usize {
    let min = band.iter().map(|c| c.score).fold(f64::INFINITY, f64::min);
    let weights: Vec<f64> = band.iter().map(|c| c.score - min + MIN_WEIGHT).collect();
    match WeightedIndex::new(&weights) {
        Ok(dist) => dist.sample(rng),
        // Degenerate weights (all zero or non-finite): fall back to greedy.
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attire_core::catalog::CatalogItem;
    use attire_core::vocab::{Colour, Gender, Role};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::assembler::Outfit;

    fn make_item(id: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            image: format!("img/{id}.jpg"),
            category: Role::Top,
            subtype: String::new(),
            colours: vec![Colour::Black],
            vibes: vec![],
            gender: Gender::Unisex,
            fit: None,
            sport_meta: None,
            name: id.to_string(),
            name_normalized: id.to_lowercase(),
            entities: vec![],
        }
    }

    fn candidate<'a>(item: &'a CatalogItem, score: f64) -> RankedOutfit<'a> {
        let mut outfit = Outfit::empty();
        outfit.set(Role::Top, item);
        RankedOutfit { outfit, score }
    }

    #[test]
    fn epsilon_zero_returns_top_n_in_order() {
        let items: Vec<CatalogItem> = (0..10).map(|i| make_item(&format!("item-{i}"))).collect();
        let candidates: Vec<RankedOutfit> = items
            .iter()
            .enumerate()
            .map(|(i, item)| candidate(item, i as f64))
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let picked = sample_diverse(candidates, 3, 0.0, &mut rng);
        let ids: Vec<&str> = picked
            .iter()
            .map(|c| c.outfit.get(Role::Top).unwrap().id.as_str())
            .collect();
        assert_eq!(ids, ["item-9", "item-8", "item-7"]);
    }

    #[test]
    fn never_returns_duplicate_signatures() {
        let item = make_item("same");
        let candidates: Vec<RankedOutfit> =
            (0..8).map(|i| candidate(&item, i as f64)).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let picked = sample_diverse(candidates, 5, 0.4, &mut rng);
        // All candidates share one signature: only one survives.
        assert_eq!(picked.len(), 1);
    }

    #[test]
    fn bounded_by_request_and_band() {
        let items: Vec<CatalogItem> = (0..4).map(|i| make_item(&format!("item-{i}"))).collect();
        let candidates: Vec<RankedOutfit> = items
            .iter()
            .enumerate()
            .map(|(i, item)| candidate(item, i as f64))
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let picked = sample_diverse(candidates.clone(), 2, 0.3, &mut rng);
        assert!(picked.len() <= 2);
        let picked = sample_diverse(candidates, 10, 0.3, &mut rng);
        assert!(picked.len() <= 4);
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let items: Vec<CatalogItem> = (0..12).map(|i| make_item(&format!("item-{i}"))).collect();
        let candidates: Vec<RankedOutfit> = items
            .iter()
            .enumerate()
            .map(|(i, item)| candidate(item, (i % 5) as f64))
            .collect();
        let run = |seed: u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            sample_diverse(candidates.clone(), 4, 0.5, &mut rng)
                .iter()
                .map(|c| c.outfit.signature())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn empty_input_yields_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(sample_diverse(Vec::new(), 5, 0.2, &mut rng).is_empty());
    }
}
