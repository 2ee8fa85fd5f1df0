//! IntentResolver: oracle call + fallback + merge policy.

use attire_core::intent::{OutfitMode, PromptIntent};
use attire_core::traits::IIntentOracle;
use attire_core::vocab::{Role, Sport, TargetGender};
use tracing::{debug, warn};

use crate::{fallback, sanitize};

/// Resolves a free-text prompt into the intent the engine consumes.
/// Owns the one-shot oracle call; every oracle failure degrades to the
/// deterministic fallback parse.
pub struct IntentResolver<'a> {
    oracle: Option<&'a dyn IIntentOracle>,
}

impl<'a> IntentResolver<'a> {
    pub fn new(oracle: Option<&'a dyn IIntentOracle>) -> Self {
        Self { oracle }
    }

    /// Resolve the prompt. Infallible: the worst case is a pure fallback
    /// intent.
    pub fn resolve(&self, prompt: &str) -> PromptIntent {
        let fallback_intent = fallback::parse_prompt(prompt);

        let oracle_intent = match self.oracle {
            Some(oracle) => match oracle.complete(prompt) {
                Ok(text) => {
                    let parsed = sanitize::sanitize_response(&text);
                    if parsed.is_none() {
                        warn!(oracle = oracle.name(), "oracle response had no usable intent");
                    }
                    parsed
                }
                Err(e) => {
                    warn!(oracle = oracle.name(), error = %e, "oracle call failed");
                    None
                }
            },
            None => None,
        };

        let used_oracle = oracle_intent.is_some();
        let intent = merge_intents(oracle_intent, fallback_intent);
        debug!(used_oracle, roles = ?intent.required_categories, "intent resolved");
        intent
    }
}

/// Pure repair function over the two intents.
///
/// The oracle's intent wins where it is well-formed; the fallback supplies
/// categories when the oracle names none, takes over the role set when both
/// are outfit-mode and the fallback implies a strictly larger one, and
/// backfills preference fields the oracle left empty.
pub fn merge_intents(oracle: Option<PromptIntent>, fallback: PromptIntent) -> PromptIntent {
    let Some(mut intent) = oracle else {
        return fallback;
    };

    if intent.required_categories.is_empty() {
        intent.required_categories = fallback.required_categories.clone();
        intent.requested_form = fallback.requested_form;
    } else if intent.outfit_mode == OutfitMode::Outfit
        && fallback.outfit_mode == OutfitMode::Outfit
        && is_strict_superset(&fallback.required_categories, &intent.required_categories)
    {
        intent.required_categories = fallback.required_categories.clone();
        intent.requested_form = fallback.requested_form;
    }

    if intent.colour_hints.is_empty() {
        intent.colour_hints = fallback.colour_hints;
    }
    if intent.vibe_tags.is_empty() {
        intent.vibe_tags = fallback.vibe_tags;
    }
    if intent.brand_focus.is_empty() {
        intent.brand_focus = fallback.brand_focus;
    }
    if intent.team_focus.is_empty() {
        intent.team_focus = fallback.team_focus;
    }
    if intent.specific_items.is_empty() {
        intent.specific_items = fallback.specific_items;
    }
    if intent.sport_context == Sport::None {
        intent.sport_context = fallback.sport_context;
    }
    if intent.fit_preference.is_none() {
        intent.fit_preference = fallback.fit_preference;
    }
    if intent.target_gender == TargetGender::Any {
        intent.target_gender = fallback.target_gender;
    }

    intent.dedupe_categories();
    intent
}

fn is_strict_superset(outer: &[Role], inner: &[Role]) -> bool {
    outer.len() > inner.len() && inner.iter().all(|r| outer.contains(r))
}
