//! ContextWeights: numeric preference vectors built once per request.

use attire_core::config::ScoringTunables;
use attire_core::text;
use attire_core::vocab::{Colour, Fit, Sport, Vibe};
use attire_core::PromptIntent;

/// Per-axis preference weights plus normalized match-token lists.
/// Built from the resolved intent; immutable afterwards.
#[derive(Debug, Clone)]
pub struct ContextWeights {
    pub colour: [f64; Colour::COUNT],
    pub vibe: [f64; Vibe::COUNT],
    pub fit: [f64; Fit::COUNT],
    pub sport: [f64; Sport::COUNT],
    pub brand_tokens: Vec<String>,
    pub team_tokens: Vec<String>,
    pub specific_tokens: Vec<String>,
    /// Whether the prompt expressed any colour opinion at all.
    pub has_colour_preference: bool,
    pub has_vibe_preference: bool,
    /// The requested sport context, `Sport::None` when absent.
    pub sport_context: Sport,
}

impl ContextWeights {
    pub fn colour_weight(&self, colour: Colour) -> f64 {
        self.colour[colour.index()]
    }

    pub fn vibe_weight(&self, vibe: Vibe) -> f64 {
        self.vibe[vibe.index()]
    }

    pub fn fit_weight(&self, fit: Fit) -> f64 {
        self.fit[fit.index()]
    }

    pub fn sport_weight(&self, sport: Sport) -> f64 {
        self.sport[sport.index()]
    }
}

/// Convert a resolved intent into numeric preference vectors.
pub fn build_weights(intent: &PromptIntent, tunables: &ScoringTunables) -> ContextWeights {
    let mut colour = [0.0; Colour::COUNT];
    if intent.colour_hints.is_empty() {
        // No colour opinion: bias towards core neutrals so versatile items
        // are not starved, beige slightly less.
        colour[Colour::Black.index()] = tunables.neutral_bias;
        colour[Colour::White.index()] = tunables.neutral_bias;
        colour[Colour::Grey.index()] = tunables.neutral_bias;
        colour[Colour::Beige.index()] = tunables.neutral_bias_beige;
    } else {
        for hint in &intent.colour_hints {
            colour[hint.index()] = 1.0;
        }
    }

    let mut vibe = [0.0; Vibe::COUNT];
    for tag in &intent.vibe_tags {
        vibe[tag.index()] = 1.0;
    }

    let fit = match intent.fit_preference.and_then(|p| p.as_fit()) {
        Some(preferred) => {
            // Non-matching fits are disfavored, not zeroed.
            let mut fit = [tunables.fit_floor; Fit::COUNT];
            fit[preferred.index()] = 1.0;
            fit
        }
        // Absent or mixed: baseline distribution; pairwise fit logic does
        // the real work downstream.
        None => tunables.fit_baseline,
    };

    let mut sport = [0.0; Sport::COUNT];
    if intent.sport_context.is_some() {
        sport[intent.sport_context.index()] = 1.0;
    }

    ContextWeights {
        colour,
        vibe,
        fit,
        sport,
        brand_tokens: text::tokenize_all(&intent.brand_focus),
        team_tokens: text::tokenize_all(&intent.team_focus),
        specific_tokens: text::tokenize_all(&intent.specific_items),
        has_colour_preference: !intent.colour_hints.is_empty(),
        has_vibe_preference: !intent.vibe_tags.is_empty(),
        sport_context: intent.sport_context,
    }
}
