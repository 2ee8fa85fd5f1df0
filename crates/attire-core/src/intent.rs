//! Structured preference intent resolved from a free-text prompt.

use serde::{Deserialize, Serialize};

use crate::vocab::{Colour, Fit, Role, Sport, TargetGender, Vibe};

/// Whether the request wants a combined outfit or one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutfitMode {
    #[default]
    Outfit,
    Single,
}

/// Which roles the request shapes up to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestedForm {
    /// top + bottom + shoes
    #[default]
    FullLook,
    TopBottom,
    MonoOnly,
    MonoWithShoes,
    SinglePiece,
}

impl RequestedForm {
    /// The required role set implied by this form, in fixed role order.
    pub fn roles(self) -> &'static [Role] {
        match self {
            RequestedForm::FullLook => &[Role::Top, Role::Bottom, Role::Shoes],
            RequestedForm::TopBottom => &[Role::Top, Role::Bottom],
            RequestedForm::MonoOnly => &[Role::Mono],
            RequestedForm::MonoWithShoes => &[Role::Mono, Role::Shoes],
            RequestedForm::SinglePiece => &[Role::Top],
        }
    }
}

/// Explicit fit preference, if the prompt expressed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitPreference {
    Oversized,
    Regular,
    Slim,
    Cropped,
    /// Deliberately varied fits; treated like no preference for weights.
    Mixed,
}

impl FitPreference {
    /// The concrete fit, unless the preference is `Mixed`.
    pub fn as_fit(self) -> Option<Fit> {
        match self {
            FitPreference::Oversized => Some(Fit::Oversized),
            FitPreference::Regular => Some(Fit::Regular),
            FitPreference::Slim => Some(Fit::Slim),
            FitPreference::Cropped => Some(Fit::Cropped),
            FitPreference::Mixed => None,
        }
    }
}

/// The structured intent consumed by the recommendation engine.
///
/// Produced by merging the oracle's sanitized output with the heuristic
/// fallback parse of the same prompt (see `attire-intent`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptIntent {
    pub outfit_mode: OutfitMode,
    pub requested_form: RequestedForm,
    /// Non-empty after repair; each role at most once.
    pub required_categories: Vec<Role>,
    pub optional_categories: Vec<Role>,
    pub target_gender: TargetGender,
    /// At most 3 tags.
    pub vibe_tags: Vec<Vibe>,
    pub colour_hints: Vec<Colour>,
    pub brand_focus: Vec<String>,
    pub team_focus: Vec<String>,
    pub sport_context: Sport,
    pub fit_preference: Option<FitPreference>,
    /// Free-text phrases naming concrete pieces ("timberland boots").
    pub specific_items: Vec<String>,
}

impl PromptIntent {
    /// Whether results are single items rather than assembled outfits.
    pub fn is_single(&self) -> bool {
        self.outfit_mode == OutfitMode::Single || self.required_categories.len() == 1
    }

    /// Drop duplicate roles, keeping fixed role order.
    pub fn dedupe_categories(&mut self) {
        let mut seen = [false; Role::COUNT];
        self.required_categories.retain(|r| {
            let keep = !seen[r.index()];
            seen[r.index()] = true;
            keep
        });
        self.required_categories.sort();
        let required = self.required_categories.clone();
        self.optional_categories.retain(|r| !required.contains(r));
    }
}
