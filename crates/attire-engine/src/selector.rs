//! Per-role candidate selection with staged constraint relaxation.
//!
//! Stages drop optional constraints one by one until a non-empty pool
//! survives; the selector never returns empty while the role has items.

use attire_core::catalog::CatalogItem;
use attire_core::text;
use attire_core::vocab::{Role, Sport};
use attire_core::PromptIntent;
use tracing::debug;

use crate::scorer::{self, ScoreCoefficients};
use crate::weights::ContextWeights;

/// One relaxation stage: which optional constraints it still enforces.
/// Gender compatibility is enforced at every stage.
#[derive(Debug, Clone, Copy)]
pub struct StageSpec {
    pub require_brand: bool,
    pub require_team: bool,
    pub require_sport_relevance: bool,
}

/// Ordered from most to least restrictive. The final stage keeps only the
/// gender filter, so stage pools widen monotonically.
pub const RELAXATION_STAGES: [StageSpec; 4] = [
    StageSpec { require_brand: true, require_team: true, require_sport_relevance: true },
    StageSpec { require_brand: false, require_team: true, require_sport_relevance: true },
    StageSpec { require_brand: false, require_team: false, require_sport_relevance: true },
    StageSpec { require_brand: false, require_team: false, require_sport_relevance: false },
];

impl StageSpec {
    /// Whether `item` survives this stage under the given request.
    /// A constraint the prompt never expressed (empty token list) passes
    /// vacuously, so a brand-only prompt still narrows to brand matches in
    /// the strictest stage instead of skipping it.
    pub fn admits(&self, item: &CatalogItem, intent: &PromptIntent, weights: &ContextWeights) -> bool {
        if !intent.target_gender.admits(item.gender) {
            return false;
        }
        if self.require_brand
            && !weights.brand_tokens.is_empty()
            && !has_brand_match(item, &weights.brand_tokens)
        {
            return false;
        }
        if self.require_team
            && !weights.team_tokens.is_empty()
            && !has_team_match(item, &weights.team_tokens)
        {
            return false;
        }
        if self.require_sport_relevance && !sport_strongly_relevant(item, weights) {
            return false;
        }
        true
    }
}

fn has_brand_match(item: &CatalogItem, tokens: &[String]) -> bool {
    let name = item.name.to_lowercase();
    tokens.iter().any(|tok| {
        name.contains(tok.as_str())
            || item.name_normalized.contains(tok.as_str())
            || item
                .entities
                .iter()
                .any(|e| text::normalize(&e.text).contains(tok.as_str()))
    })
}

fn has_team_match(item: &CatalogItem, tokens: &[String]) -> bool {
    item.teams().iter().any(|team| {
        let team = text::normalize(team);
        tokens.iter().any(|tok| scorer::teams_match(&team, tok))
    })
}

/// With a sport context, only sport/team-relevant items qualify. Without
/// one, the stage admits only non-sport items; sport items fall through to
/// the gender-only stage instead of being excluded outright.
fn sport_strongly_relevant(item: &CatalogItem, weights: &ContextWeights) -> bool {
    if weights.sport_context.is_some() {
        item.sport() == weights.sport_context || has_team_match(item, &weights.team_tokens)
    } else {
        item.sport() == Sport::None
    }
}

/// Select a bounded, score-sorted shortlist for one garment role.
pub fn select_candidates<'a>(
    catalog: &'a [CatalogItem],
    role: Role,
    intent: &PromptIntent,
    weights: &ContextWeights,
    coef: &ScoreCoefficients,
    limit: usize,
) -> Vec<&'a CatalogItem> {
    let role_pool: Vec<&CatalogItem> = catalog.iter().filter(|i| i.category == role).collect();
    if role_pool.is_empty() {
        return Vec::new();
    }

    // Sport narrowing: keep context-relevant items when any exist, never
    // empty the pool here.
    let narrowed: Vec<&CatalogItem> = if weights.sport_context.is_some() {
        let relevant: Vec<&CatalogItem> = role_pool
            .iter()
            .copied()
            .filter(|i| {
                i.sport() == weights.sport_context || has_team_match(i, &weights.team_tokens)
            })
            .collect();
        if relevant.is_empty() { role_pool.clone() } else { relevant }
    } else {
        role_pool.clone()
    };

    // Staged relaxation: first non-empty stage wins.
    let mut pool: Vec<&CatalogItem> = Vec::new();
    for (stage_idx, stage) in RELAXATION_STAGES.iter().enumerate() {
        pool = narrowed
            .iter()
            .copied()
            .filter(|i| stage.admits(i, intent, weights))
            .collect();
        if !pool.is_empty() {
            debug!(%role, stage = stage_idx, pool = pool.len(), "relaxation stage selected");
            break;
        }
    }

    if !pool.is_empty() && !weights.specific_tokens.is_empty() {
        // Named pieces win: keep the items tying for the most matched
        // specific-item tokens.
        let counts: Vec<usize> = pool
            .iter()
            .map(|i| scorer::specific_match_count(i, &weights.specific_tokens))
            .collect();
        let max = counts.iter().copied().max().unwrap_or(0);
        pool = pool
            .into_iter()
            .zip(counts)
            .filter(|(_, c)| *c == max)
            .map(|(i, _)| i)
            .collect();
    }

    if pool.is_empty() {
        // Every stage came up empty; ignore all constraints rather than
        // return nothing for a populated role.
        debug!(%role, "all relaxation stages empty, widening to full role pool");
        pool = role_pool;
    }

    let mut scored: Vec<(&CatalogItem, f64)> = pool
        .into_iter()
        .map(|i| (i, scorer::score_item(i, weights, coef)))
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(limit);
    scored.into_iter().map(|(i, _)| i).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use attire_core::catalog::SportMeta;
    use attire_core::vocab::{Colour, Gender, TargetGender};

    use crate::weights::build_weights;

    fn make_item(id: &str, role: Role, gender: Gender) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            image: format!("img/{id}.jpg"),
            category: role,
            subtype: String::new(),
            colours: vec![Colour::Black],
            vibes: vec![],
            gender,
            fit: None,
            sport_meta: None,
            name: id.to_string(),
            name_normalized: id.to_lowercase(),
            entities: vec![],
        }
    }

    fn weights_for(intent: &PromptIntent) -> ContextWeights {
        build_weights(intent, &Default::default())
    }

    #[test]
    fn never_empty_when_role_has_items() {
        // A women-only catalog with a men target: all stages fail the
        // gender filter, the full role pool wins.
        let catalog = vec![make_item("skirt", Role::Bottom, Gender::Women)];
        let intent = PromptIntent {
            target_gender: TargetGender::Men,
            required_categories: vec![Role::Bottom],
            ..Default::default()
        };
        let weights = weights_for(&intent);
        let picked = select_candidates(
            &catalog,
            Role::Bottom,
            &intent,
            &weights,
            &Default::default(),
            12,
        );
        assert_eq!(picked.len(), 1);
    }

    #[test]
    fn empty_role_yields_empty() {
        let catalog = vec![make_item("tee", Role::Top, Gender::Unisex)];
        let intent = PromptIntent::default();
        let weights = weights_for(&intent);
        let picked =
            select_candidates(&catalog, Role::Shoes, &intent, &weights, &Default::default(), 12);
        assert!(picked.is_empty());
    }

    #[test]
    fn non_sport_items_preferred_without_context() {
        let mut jersey = make_item("jersey", Role::Top, Gender::Unisex);
        jersey.sport_meta = Some(SportMeta {
            sport: Sport::Football,
            teams: vec![],
            is_kit: true,
        });
        let plain = make_item("plain", Role::Top, Gender::Unisex);
        let catalog = vec![jersey, plain];
        let intent = PromptIntent::default();
        let weights = weights_for(&intent);
        let picked =
            select_candidates(&catalog, Role::Top, &intent, &weights, &Default::default(), 12);
        // The sport-relevance stage keeps only the plain tee.
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].id, "plain");
    }

    #[test]
    fn sport_items_survive_when_nothing_else_exists() {
        let mut jersey = make_item("jersey", Role::Top, Gender::Unisex);
        jersey.sport_meta = Some(SportMeta {
            sport: Sport::Football,
            teams: vec![],
            is_kit: true,
        });
        let catalog = vec![jersey];
        let intent = PromptIntent::default();
        let weights = weights_for(&intent);
        let picked =
            select_candidates(&catalog, Role::Top, &intent, &weights, &Default::default(), 12);
        assert_eq!(picked.len(), 1);
    }

    #[test]
    fn sport_context_narrows_to_relevant_items() {
        let mut jersey = make_item("barca-jersey", Role::Top, Gender::Unisex);
        jersey.sport_meta = Some(SportMeta {
            sport: Sport::Football,
            teams: vec!["barcelona".into()],
            is_kit: true,
        });
        let plain = make_item("plain-tee", Role::Top, Gender::Unisex);
        let catalog = vec![plain, jersey];
        let intent = PromptIntent {
            sport_context: Sport::Football,
            team_focus: vec!["barcelona".into()],
            ..Default::default()
        };
        let weights = weights_for(&intent);
        let picked =
            select_candidates(&catalog, Role::Top, &intent, &weights, &Default::default(), 12);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].id, "barca-jersey");
    }

    #[test]
    fn brand_only_prompt_narrows_to_brand_matches() {
        let mut branded = make_item("nike-hoodie", Role::Top, Gender::Unisex);
        branded.name = "Nike Tech Hoodie".into();
        branded.name_normalized = "nike tech hoodie".into();
        let plain = make_item("plain-hoodie", Role::Top, Gender::Unisex);
        let catalog = vec![plain, branded];
        let intent = PromptIntent {
            brand_focus: vec!["nike".into()],
            ..Default::default()
        };
        let weights = weights_for(&intent);
        // No team focus: the team constraint is vacuous and the strictest
        // stage still applies the brand filter.
        let picked =
            select_candidates(&catalog, Role::Top, &intent, &weights, &Default::default(), 12);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].id, "nike-hoodie");
    }

    #[test]
    fn specific_tokens_pull_named_pieces_forward() {
        let mut timbs = make_item("timb-boots", Role::Shoes, Gender::Unisex);
        timbs.name = "Timberland 6-Inch Boots".into();
        timbs.name_normalized = "timberland 6 inch boots".into();
        timbs.colours = vec![Colour::Yellow];
        let sneaker = make_item("white-sneaker", Role::Shoes, Gender::Unisex);
        let catalog = vec![sneaker, timbs];
        let intent = PromptIntent {
            specific_items: vec!["timberland boots".into()],
            ..Default::default()
        };
        let weights = weights_for(&intent);
        let picked =
            select_candidates(&catalog, Role::Shoes, &intent, &weights, &Default::default(), 12);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].id, "timb-boots");
    }

    #[test]
    fn limit_truncates_shortlist() {
        let catalog: Vec<CatalogItem> = (0..20)
            .map(|i| make_item(&format!("tee-{i}"), Role::Top, Gender::Unisex))
            .collect();
        let intent = PromptIntent::default();
        let weights = weights_for(&intent);
        let picked =
            select_candidates(&catalog, Role::Top, &intent, &weights, &Default::default(), 5);
        assert_eq!(picked.len(), 5);
    }

    #[test]
    fn stage_pools_widen_monotonically() {
        let mut jersey = make_item("jersey", Role::Top, Gender::Men);
        jersey.sport_meta = Some(SportMeta {
            sport: Sport::Football,
            teams: vec!["arsenal".into()],
            is_kit: false,
        });
        let plain = make_item("plain", Role::Top, Gender::Unisex);
        let womens = make_item("blouse", Role::Top, Gender::Women);
        let catalog = vec![jersey, plain, womens];
        let intent = PromptIntent {
            sport_context: Sport::Football,
            team_focus: vec!["arsenal".into()],
            ..Default::default()
        };
        let weights = weights_for(&intent);
        let mut previous = 0usize;
        for stage in RELAXATION_STAGES {
            let pool = catalog
                .iter()
                .filter(|i| stage.admits(i, &intent, &weights))
                .count();
            assert!(pool >= previous);
            previous = pool;
        }
    }
}
