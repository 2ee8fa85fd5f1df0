//! Outfit assembly: per-role shortlists → scored outfit candidates.
//!
//! Composite score = sum of item scores + pairwise compatibility terms for
//! every adjacent role pair present, + uniform tie-breaking jitter.

use attire_core::catalog::CatalogItem;
use attire_core::text;
use attire_core::vocab::{Fit, Role, Sport};
use rand::Rng;

use crate::scorer::{self, ScoreCoefficients};
use crate::weights::ContextWeights;

/// Bonus for complementary vibes across two garments.
const VIBE_CROSS_BONUS: f64 = 0.5;
/// Sport-pair penalties when no sport context was requested.
const SPORT_PAIR_BOTH_PENALTY: f64 = 0.6;
const SPORT_PAIR_ONE_PENALTY: f64 = 0.3;
/// Team-pair values.
const TEAM_PAIR_MATCH: f64 = 1.2;
const TEAM_PAIR_MISMATCH_PENALTY: f64 = 0.3;

/// Role pairs whose compatibility contributes to the composite score.
const ADJACENT_PAIRS: [(Role, Role); 4] = [
    (Role::Top, Role::Bottom),
    (Role::Top, Role::Shoes),
    (Role::Bottom, Role::Shoes),
    (Role::Mono, Role::Shoes),
];

/// Weights for the pairwise compatibility terms.
#[derive(Debug, Clone)]
pub struct PairCoefficients {
    pub colour: f64,
    pub vibe: f64,
    pub fit: f64,
    pub sport: f64,
    pub team: f64,
}

impl Default for PairCoefficients {
    fn default() -> Self {
        Self { colour: 0.6, vibe: 0.9, fit: 0.7, sport: 0.8, team: 1.0 }
    }
}

/// A partial role → item mapping, populated only for required roles.
/// Ephemeral: lives through assembly and sampling, never persisted.
#[derive(Debug, Clone)]
pub struct Outfit<'a> {
    slots: [Option<&'a CatalogItem>; Role::COUNT],
}

impl<'a> Outfit<'a> {
    pub fn empty() -> Self {
        Self { slots: [None; Role::COUNT] }
    }

    pub fn set(&mut self, role: Role, item: &'a CatalogItem) {
        self.slots[role.index()] = Some(item);
    }

    pub fn get(&self, role: Role) -> Option<&'a CatalogItem> {
        self.slots[role.index()]
    }

    /// Populated slots in fixed role order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &'a CatalogItem)> + '_ {
        Role::ALL.iter().filter_map(|&r| self.get(r).map(|i| (r, i)))
    }

    /// Identity of the item set, independent of scores: sorted role/id pairs.
    pub fn signature(&self) -> String {
        let mut parts: Vec<String> =
            self.iter().map(|(role, item)| format!("{role}={}", item.id)).collect();
        parts.sort();
        parts.join("|")
    }
}

/// An outfit candidate with its composite score.
#[derive(Debug, Clone)]
pub struct RankedOutfit<'a> {
    pub outfit: Outfit<'a>,
    pub score: f64,
}

/// Assemble scored candidates from per-role shortlists.
///
/// `shortlists` holds the required roles in fixed role order. In single
/// mode every shortlist item becomes its own candidate; otherwise the full
/// cross-product of the shortlists is enumerated.
pub fn assemble<'a, R: Rng + ?Sized>(
    shortlists: &[(Role, Vec<&'a CatalogItem>)],
    weights: &ContextWeights,
    coef: &ScoreCoefficients,
    pair_coef: &PairCoefficients,
    single: bool,
    jitter: f64,
    rng: &mut R,
) -> Vec<RankedOutfit<'a>> {
    let mut candidates = Vec::new();

    if single || shortlists.len() == 1 {
        for (role, items) in shortlists {
            for item in items {
                let mut outfit = Outfit::empty();
                outfit.set(*role, item);
                let score = scorer::score_item(item, weights, coef) + draw_jitter(jitter, rng);
                candidates.push(RankedOutfit { outfit, score });
            }
        }
        return candidates;
    }

    let mut outfit = Outfit::empty();
    cross_product(
        shortlists,
        0,
        &mut outfit,
        weights,
        coef,
        pair_coef,
        jitter,
        rng,
        &mut candidates,
    );
    candidates
}

#[allow(clippy::too_many_arguments)]
fn cross_product<'a, R: Rng + ?Sized>(
    shortlists: &[(Role, Vec<&'a CatalogItem>)],
    depth: usize,
    outfit: &mut Outfit<'a>,
    weights: &ContextWeights,
    coef: &ScoreCoefficients,
    pair_coef: &PairCoefficients,
    jitter: f64,
    rng: &mut R,
    out: &mut Vec<RankedOutfit<'a>>,
) {
    if depth == shortlists.len() {
        let score = composite_score(outfit, weights, coef, pair_coef) + draw_jitter(jitter, rng);
        out.push(RankedOutfit { outfit: outfit.clone(), score });
        return;
    }
    let (role, items) = &shortlists[depth];
    for item in items {
        outfit.set(*role, item);
        cross_product(shortlists, depth + 1, outfit, weights, coef, pair_coef, jitter, rng, out);
    }
    outfit.slots[role.index()] = None;
}

fn draw_jitter<R: Rng + ?Sized>(jitter: f64, rng: &mut R) -> f64 {
    if jitter > 0.0 {
        rng.gen_range(-jitter..=jitter)
    } else {
        0.0
    }
}

/// Sum of item scores plus pairwise terms for the adjacent pairs present.
pub fn composite_score(
    outfit: &Outfit<'_>,
    weights: &ContextWeights,
    coef: &ScoreCoefficients,
    pair_coef: &PairCoefficients,
) -> f64 {
    let mut score: f64 = outfit
        .iter()
        .map(|(_, item)| scorer::score_item(item, weights, coef))
        .sum();

    for (ra, rb) in ADJACENT_PAIRS {
        let (Some(a), Some(b)) = (outfit.get(ra), outfit.get(rb)) else {
            continue;
        };
        score += pair_coef.colour * pair_colour(a, b)
            + pair_coef.vibe * pair_vibe(a, b)
            + pair_coef.sport * pair_sport(a, b, weights.sport_context)
            + pair_coef.team * pair_team(a, b);
        if (ra, rb) == (Role::Top, Role::Bottom) {
            score += pair_coef.fit * pair_fit(a.effective_fit(), b.effective_fit());
        }
    }
    score
}

/// Average colour harmony over all colour-pair combinations of two items.
pub fn pair_colour(a: &CatalogItem, b: &CatalogItem) -> f64 {
    let mut total = 0.0;
    let mut pairs = 0usize;
    for ca in &a.colours {
        for cb in &b.colours {
            total += match (ca == cb, ca.is_neutral(), cb.is_neutral()) {
                (true, _, _) => 1.0,
                (false, true, true) => 0.6,
                (false, true, false) | (false, false, true) => 0.4,
                (false, false, false) => 0.0,
            };
            pairs += 1;
        }
    }
    total / pairs.max(1) as f64
}

/// Shared vibes plus a bonus for complementary cross pairs.
pub fn pair_vibe(a: &CatalogItem, b: &CatalogItem) -> f64 {
    let mut score = 0.0;
    for va in &a.vibes {
        for vb in &b.vibes {
            if va == vb {
                score += 1.0;
            } else if va.complements(*vb) {
                score += VIBE_CROSS_BONUS;
            }
        }
    }
    score
}

/// Fit pairing table, top fit first.
pub fn pair_fit(top: Fit, bottom: Fit) -> f64 {
    match (top, bottom) {
        (Fit::Oversized, Fit::Slim) => 1.3,
        (Fit::Oversized, Fit::Regular) => 1.0,
        (Fit::Regular, Fit::Slim) => 1.0,
        (Fit::Slim, Fit::Slim) => 0.9,
        (Fit::Oversized, Fit::Oversized) => 0.4,
        _ => 0.5,
    }
}

/// Sport coherence between two garments under the requested context.
pub fn pair_sport(a: &CatalogItem, b: &CatalogItem, context: Sport) -> f64 {
    let (sa, sb) = (a.sport(), b.sport());
    if context == Sport::None {
        match (sa != Sport::None, sb != Sport::None) {
            (false, false) => 0.0,
            (true, true) => -SPORT_PAIR_BOTH_PENALTY,
            _ => -SPORT_PAIR_ONE_PENALTY,
        }
    } else if sa == Sport::None || sb == Sport::None {
        0.0
    } else if sa == sb {
        1.0
    } else {
        0.2
    }
}

/// Team coherence: reward matching teams, lightly punish clashing ones.
pub fn pair_team(a: &CatalogItem, b: &CatalogItem) -> f64 {
    if a.teams().is_empty() || b.teams().is_empty() {
        return 0.0;
    }
    let matched = a.teams().iter().any(|ta| {
        let ta = text::normalize(ta);
        b.teams()
            .iter()
            .any(|tb| scorer::teams_match(&ta, &text::normalize(tb)))
    });
    if matched {
        TEAM_PAIR_MATCH
    } else {
        -TEAM_PAIR_MISMATCH_PENALTY
    }
}
