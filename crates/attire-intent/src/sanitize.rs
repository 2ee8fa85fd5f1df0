//! Shape sanitization of oracle output.
//!
//! The oracle is trusted for semantics but not for shape: the JSON object
//! is extracted from wherever it sits in the response text, parsed into an
//! all-strings shape, and every enum value outside the closed vocabularies
//! is silently dropped.

use attire_core::intent::{FitPreference, PromptIntent};
use attire_core::vocab::{Colour, Role, Sport, TargetGender, Vibe};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Maximum vibe tags kept after sanitization.
const MAX_VIBE_TAGS: usize = 3;

/// Loosely-typed mirror of [`PromptIntent`]: everything optional, enums as
/// free strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawIntent {
    outfit_mode: Option<String>,
    requested_form: Option<String>,
    required_categories: Vec<String>,
    optional_categories: Vec<String>,
    target_gender: Option<String>,
    vibe_tags: Vec<String>,
    colour_hints: Vec<String>,
    brand_focus: Vec<String>,
    team_focus: Vec<String>,
    sport_context: Option<String>,
    fit_preference: Option<String>,
    specific_items: Vec<String>,
}

/// Extract and sanitize the intent embedded in an oracle response.
/// Returns `None` for empty or unparseable responses.
pub fn sanitize_response(text: &str) -> Option<PromptIntent> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    let raw: RawIntent = serde_json::from_str(&text[start..=end]).ok()?;

    let mut intent = PromptIntent {
        outfit_mode: parse_enum(raw.outfit_mode.as_deref()).unwrap_or_default(),
        requested_form: parse_enum(raw.requested_form.as_deref()).unwrap_or_default(),
        required_categories: parse_enum_list::<Role>(&raw.required_categories),
        optional_categories: parse_enum_list::<Role>(&raw.optional_categories),
        target_gender: parse_enum::<TargetGender>(raw.target_gender.as_deref())
            .unwrap_or_default(),
        vibe_tags: parse_enum_list::<Vibe>(&raw.vibe_tags),
        colour_hints: parse_enum_list::<Colour>(&raw.colour_hints),
        brand_focus: raw.brand_focus,
        team_focus: raw.team_focus,
        sport_context: parse_enum::<Sport>(raw.sport_context.as_deref()).unwrap_or_default(),
        fit_preference: parse_enum::<FitPreference>(raw.fit_preference.as_deref()),
        specific_items: raw.specific_items,
    };
    intent.vibe_tags.truncate(MAX_VIBE_TAGS);
    intent.dedupe_categories();

    debug!(roles = ?intent.required_categories, "oracle intent sanitized");
    Some(intent)
}

/// Parse one closed-vocabulary value; anything unknown becomes `None`.
fn parse_enum<T: DeserializeOwned>(value: Option<&str>) -> Option<T> {
    let value = value?.trim().to_lowercase();
    serde_json::from_value(Value::String(value)).ok()
}

fn parse_enum_list<T: DeserializeOwned>(values: &[String]) -> Vec<T> {
    values
        .iter()
        .filter_map(|v| parse_enum(Some(v.as_str())))
        .collect()
}
