//! Multi-factor item scorer (7 factors).
//!
//! Factors: colour, vibe, fit, brand, sport, team, specific-item match.
//! Each factor lands in roughly [-1, 2]; the composite is a fixed linear
//! combination. Pure function of item and weights.

use attire_core::catalog::{CatalogItem, EntityKind};
use attire_core::text;
use attire_core::vocab::{Colour, Sport};

use crate::weights::ContextWeights;

/// Penalty when the user hinted colours and the item matches none.
const COLOUR_MISMATCH_PENALTY: f64 = 0.4;
/// Scale of the versatile-neutral bonus.
const NEUTRAL_BONUS_SCALE: f64 = 0.3;
/// Penalty when the user tagged vibes and the item matches none.
const VIBE_MISMATCH_PENALTY: f64 = 0.3;
/// Brand token hit against the item name.
const BRAND_NAME_POINT: f64 = 1.0;
/// Brand token hit against an entity; entities are higher-precision signals.
const BRAND_ENTITY_POINT: f64 = 1.5;
/// Bonus for a kit whose sport matches the requested context.
const KIT_MATCH_BONUS: f64 = 0.5;
/// Penalty for sport-typed items leaking into a neutral request.
const SPORT_LEAK_PENALTY: f64 = 0.4;
const KIT_LEAK_PENALTY: f64 = 0.7;
/// One point per distinct team-match source.
const TEAM_SOURCE_POINT: f64 = 1.0;

/// Weights for the 7 scoring factors.
#[derive(Debug, Clone)]
pub struct ScoreCoefficients {
    pub colour: f64,
    pub vibe: f64,
    pub fit: f64,
    pub brand: f64,
    pub sport: f64,
    pub team: f64,
    pub specific: f64,
}

impl Default for ScoreCoefficients {
    fn default() -> Self {
        Self {
            colour: 1.0,
            vibe: 1.2,
            fit: 0.8,
            brand: 1.0,
            sport: 1.0,
            team: 1.2,
            specific: 1.5,
        }
    }
}

/// Composite alignment score for one item against the request weights.
pub fn score_item(item: &CatalogItem, weights: &ContextWeights, coef: &ScoreCoefficients) -> f64 {
    coef.colour * colour_alignment(item, weights)
        + coef.vibe * vibe_alignment(item, weights)
        + coef.fit * weights.fit_weight(item.effective_fit())
        + coef.brand * brand_alignment(item, weights)
        + coef.sport * sport_alignment(item, weights)
        + coef.team * team_alignment(item, weights)
        + coef.specific * specific_match_count(item, &weights.specific_tokens) as f64
}

fn colour_alignment(item: &CatalogItem, weights: &ContextWeights) -> f64 {
    let best = item
        .colours
        .iter()
        .map(|c| weights.colour_weight(*c))
        .fold(0.0, f64::max);

    let mut score = best;
    if weights.has_colour_preference && best == 0.0 {
        score -= COLOUR_MISMATCH_PENALTY;
    }

    // Versatile neutrals ride along when the request leans neutral.
    if item.colours.iter().any(|c| c.is_neutral()) {
        let strongest_neutral = Colour::ALL
            .iter()
            .filter(|c| c.is_neutral())
            .map(|c| weights.colour_weight(*c))
            .fold(0.0, f64::max);
        score += NEUTRAL_BONUS_SCALE * strongest_neutral;
    }
    score
}

fn vibe_alignment(item: &CatalogItem, weights: &ContextWeights) -> f64 {
    let sum: f64 = item.vibes.iter().map(|v| weights.vibe_weight(*v)).sum();
    if weights.has_vibe_preference && sum == 0.0 {
        -VIBE_MISMATCH_PENALTY
    } else {
        sum
    }
}

fn brand_alignment(item: &CatalogItem, weights: &ContextWeights) -> f64 {
    let mut score = 0.0;
    let name = item.name.to_lowercase();
    for token in &weights.brand_tokens {
        if name.contains(token.as_str()) || item.name_normalized.contains(token.as_str()) {
            score += BRAND_NAME_POINT;
        }
        for entity in &item.entities {
            if text::normalize(&entity.text).contains(token.as_str()) {
                score += BRAND_ENTITY_POINT;
            }
        }
    }
    score
}

fn sport_alignment(item: &CatalogItem, weights: &ContextWeights) -> f64 {
    let sport = item.sport();
    let mut score = weights.sport_weight(sport);

    if weights.sport_context.is_some() {
        if item.is_kit() && sport == weights.sport_context {
            score += KIT_MATCH_BONUS;
        }
    } else if sport != Sport::None {
        // Sport garments must not leak into neutral requests.
        score -= if item.is_kit() { KIT_LEAK_PENALTY } else { SPORT_LEAK_PENALTY };
    }
    score
}

/// Fuzzy team-name comparison. Team names normalize asymmetrically
/// ("barca" vs "fc barcelona"), so substrings match in both directions.
pub fn teams_match(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}

fn team_alignment(item: &CatalogItem, weights: &ContextWeights) -> f64 {
    if weights.team_tokens.is_empty() {
        return 0.0;
    }
    let mut score = 0.0;

    // Source 1: tagged team metadata.
    if item.teams().iter().any(|team| {
        weights
            .team_tokens
            .iter()
            .any(|tok| teams_match(&text::normalize(team), tok))
    }) {
        score += TEAM_SOURCE_POINT;
    }

    // Source 2: team-typed entities.
    if item
        .entities
        .iter()
        .filter(|e| e.kind == EntityKind::Team)
        .any(|e| {
            weights
                .team_tokens
                .iter()
                .any(|tok| teams_match(&text::normalize(&e.text), tok))
        })
    {
        score += TEAM_SOURCE_POINT;
    }

    // Source 3: combined text blob.
    let blob = combined_blob(item);
    if weights.team_tokens.iter().any(|tok| blob.contains(tok.as_str())) {
        score += TEAM_SOURCE_POINT;
    }
    score
}

fn combined_blob(item: &CatalogItem) -> String {
    let mut blob = item.name_normalized.clone();
    for team in item.teams() {
        blob.push(' ');
        blob.push_str(&text::normalize(team));
    }
    for entity in &item.entities {
        blob.push(' ');
        blob.push_str(&text::normalize(&entity.text));
    }
    blob
}

/// Number of specific-item tokens the item matches across name, normalized
/// name, image reference, and entity texts. Also drives the selector's
/// named-piece filter.
pub fn specific_match_count(item: &CatalogItem, tokens: &[String]) -> usize {
    if tokens.is_empty() {
        return 0;
    }
    let name = item.name.to_lowercase();
    let image = item.image.to_lowercase();
    tokens
        .iter()
        .filter(|tok| {
            name.contains(tok.as_str())
                || item.name_normalized.contains(tok.as_str())
                || image.contains(tok.as_str())
                || item
                    .entities
                    .iter()
                    .any(|e| text::normalize(&e.text).contains(tok.as_str()))
        })
        .count()
}
