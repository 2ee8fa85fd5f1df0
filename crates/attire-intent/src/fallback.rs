//! Deterministic heuristic intent parser.
//!
//! Keyword lexicons over the normalized prompt. Always succeeds, which
//! makes it both the authoritative fallback when the oracle fails and the
//! repair source when the oracle under-specifies.

use attire_core::intent::{FitPreference, OutfitMode, PromptIntent, RequestedForm};
use attire_core::text;
use attire_core::vocab::{Colour, Role, Sport, TargetGender, Vibe};
use tracing::debug;

const MAX_VIBE_TAGS: usize = 3;

/// Colour names and common synonyms.
const COLOUR_LEXICON: &[(&str, Colour)] = &[
    ("black", Colour::Black),
    ("white", Colour::White),
    ("grey", Colour::Grey),
    ("gray", Colour::Grey),
    ("charcoal", Colour::Grey),
    ("beige", Colour::Beige),
    ("cream", Colour::Beige),
    ("tan", Colour::Beige),
    ("khaki", Colour::Beige),
    ("brown", Colour::Brown),
    ("red", Colour::Red),
    ("blue", Colour::Blue),
    ("navy", Colour::Blue),
    ("green", Colour::Green),
    ("olive", Colour::Green),
    ("yellow", Colour::Yellow),
    ("pink", Colour::Pink),
    ("purple", Colour::Purple),
];

const VIBE_LEXICON: &[(&str, Vibe)] = &[
    ("streetwear", Vibe::Streetwear),
    ("street style", Vibe::Streetwear),
    ("sporty", Vibe::Sporty),
    ("athleisure", Vibe::Sporty),
    ("casual", Vibe::Casual),
    ("chic", Vibe::Chic),
    ("elegant", Vibe::Chic),
    ("minimal", Vibe::Minimal),
    ("minimalist", Vibe::Minimal),
    ("vintage", Vibe::Vintage),
    ("retro", Vibe::Vintage),
    ("formal", Vibe::Formal),
    ("office", Vibe::Formal),
    ("business", Vibe::Formal),
    ("grunge", Vibe::Grunge),
    ("y2k", Vibe::Y2k),
];

/// Garment nouns mapped to roles. Multi-word phrases are matched against
/// the normalized prompt before single tokens.
const GARMENT_LEXICON: &[(&str, Role)] = &[
    ("t shirt", Role::Top),
    ("tshirt", Role::Top),
    ("tee", Role::Top),
    ("shirt", Role::Top),
    ("hoodie", Role::Top),
    ("sweater", Role::Top),
    ("crewneck", Role::Top),
    ("jacket", Role::Top),
    ("jersey", Role::Top),
    ("blouse", Role::Top),
    ("jeans", Role::Bottom),
    ("trousers", Role::Bottom),
    ("pants", Role::Bottom),
    ("cargos", Role::Bottom),
    ("cargo", Role::Bottom),
    ("shorts", Role::Bottom),
    ("skirt", Role::Bottom),
    ("joggers", Role::Bottom),
    ("sweatpants", Role::Bottom),
    ("sneakers", Role::Shoes),
    ("sneaker", Role::Shoes),
    ("trainers", Role::Shoes),
    ("boots", Role::Shoes),
    ("shoes", Role::Shoes),
    ("heels", Role::Shoes),
    ("loafers", Role::Shoes),
    ("flats", Role::Shoes),
    ("dress", Role::Mono),
    ("jumpsuit", Role::Mono),
    ("overalls", Role::Mono),
    ("gown", Role::Mono),
];

const SPORT_LEXICON: &[(&str, Sport)] = &[
    ("football", Sport::Football),
    ("soccer", Sport::Football),
    ("basketball", Sport::Basketball),
    ("nba", Sport::Basketball),
    ("tennis", Sport::Tennis),
    ("running", Sport::Running),
    ("marathon", Sport::Running),
    ("cycling", Sport::Cycling),
    ("motorsport", Sport::Motorsport),
    ("formula 1", Sport::Motorsport),
    ("f1", Sport::Motorsport),
];

/// Well-known teams with the sport they imply.
const TEAM_LEXICON: &[(&str, Sport)] = &[
    ("barcelona", Sport::Football),
    ("barca", Sport::Football),
    ("real madrid", Sport::Football),
    ("arsenal", Sport::Football),
    ("liverpool", Sport::Football),
    ("manchester united", Sport::Football),
    ("juventus", Sport::Football),
    ("bayern", Sport::Football),
    ("psg", Sport::Football),
    ("lakers", Sport::Basketball),
    ("celtics", Sport::Basketball),
    ("bulls", Sport::Basketball),
    ("ferrari", Sport::Motorsport),
    ("mclaren", Sport::Motorsport),
    ("red bull", Sport::Motorsport),
];

const BRAND_LEXICON: &[&str] = &[
    "nike",
    "adidas",
    "puma",
    "new balance",
    "carhartt",
    "stussy",
    "timberland",
    "dr martens",
    "converse",
    "vans",
    "zara",
    "uniqlo",
    "north face",
    "patagonia",
    "levis",
];

const FIT_LEXICON: &[(&str, FitPreference)] = &[
    ("oversized", FitPreference::Oversized),
    ("baggy", FitPreference::Oversized),
    ("loose", FitPreference::Oversized),
    ("slim", FitPreference::Slim),
    ("skinny", FitPreference::Slim),
    ("fitted", FitPreference::Slim),
    ("cropped", FitPreference::Cropped),
    ("regular fit", FitPreference::Regular),
];

const MEN_WORDS: &[&str] = &["men", "mens", "man", "male", "him", "guy"];
const WOMEN_WORDS: &[&str] = &["women", "womens", "woman", "female", "her"];
const OUTFIT_CUES: &[&str] = &["outfit", "look", "full fit", "head to toe"];

/// Words that never qualify a garment noun into a specific-item phrase.
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "some", "my", "me", "and", "or", "for", "with", "in", "of", "to", "that",
    "this", "nice", "good", "cool", "new",
];

/// Parse a prompt into an intent. Never fails; an unintelligible prompt
/// yields a default full-look intent.
pub fn parse_prompt(prompt: &str) -> PromptIntent {
    let normalized = text::normalize(prompt);
    let padded = format!(" {normalized} ");
    // Word-boundary substring match: both sides are space-delimited.
    let mentions = |phrase: &str| padded.contains(&format!(" {phrase} "));

    let mut intent = PromptIntent::default();

    for (word, colour) in COLOUR_LEXICON {
        if mentions(word) && !intent.colour_hints.contains(colour) {
            intent.colour_hints.push(*colour);
        }
    }

    for (word, vibe) in VIBE_LEXICON {
        if mentions(word) && !intent.vibe_tags.contains(vibe) {
            intent.vibe_tags.push(*vibe);
        }
    }
    intent.vibe_tags.truncate(MAX_VIBE_TAGS);

    for (word, sport) in SPORT_LEXICON {
        if mentions(word) {
            intent.sport_context = *sport;
            break;
        }
    }

    for (team, sport) in TEAM_LEXICON {
        if mentions(team) {
            intent.team_focus.push((*team).to_string());
            if intent.sport_context == Sport::None {
                intent.sport_context = *sport;
            }
        }
    }

    for brand in BRAND_LEXICON {
        if mentions(brand) {
            intent.brand_focus.push((*brand).to_string());
        }
    }

    for (word, fit) in FIT_LEXICON {
        if mentions(word) {
            intent.fit_preference = Some(*fit);
            break;
        }
    }

    if MEN_WORDS.iter().any(|w| mentions(w)) {
        intent.target_gender = TargetGender::Men;
    } else if WOMEN_WORDS.iter().any(|w| mentions(w)) {
        intent.target_gender = TargetGender::Women;
    }

    let mentioned_roles = collect_roles(&mentions);
    intent.specific_items = collect_specific_items(&normalized);

    let wants_outfit = OUTFIT_CUES.iter().any(|c| mentions(c));
    apply_form(&mut intent, &mentioned_roles, wants_outfit);
    intent.dedupe_categories();

    debug!(
        roles = ?intent.required_categories,
        mode = ?intent.outfit_mode,
        "fallback intent parsed"
    );
    intent
}

fn collect_roles(mentions: &dyn Fn(&str) -> bool) -> Vec<Role> {
    let mut roles = Vec::new();
    for (word, role) in GARMENT_LEXICON {
        if mentions(word) && !roles.contains(role) {
            roles.push(*role);
        }
    }
    roles
}

/// Decide mode, form, and required categories from the mentioned roles.
fn apply_form(intent: &mut PromptIntent, roles: &[Role], wants_outfit: bool) {
    let has = |r: Role| roles.contains(&r);

    if roles.is_empty() || (wants_outfit && roles.len() < 2 && !has(Role::Mono)) {
        intent.outfit_mode = OutfitMode::Outfit;
        intent.requested_form = RequestedForm::FullLook;
    } else if has(Role::Mono) {
        intent.outfit_mode = OutfitMode::Outfit;
        intent.requested_form = if has(Role::Shoes) {
            RequestedForm::MonoWithShoes
        } else {
            RequestedForm::MonoOnly
        };
    } else if roles.len() == 1 {
        intent.outfit_mode = OutfitMode::Single;
        intent.requested_form = RequestedForm::SinglePiece;
        intent.required_categories = roles.to_vec();
        return;
    } else if has(Role::Top) && has(Role::Bottom) && has(Role::Shoes) {
        intent.outfit_mode = OutfitMode::Outfit;
        intent.requested_form = RequestedForm::FullLook;
    } else if has(Role::Top) && has(Role::Bottom) {
        intent.outfit_mode = OutfitMode::Outfit;
        intent.requested_form = RequestedForm::TopBottom;
    } else {
        // An unusual pair like top+shoes: keep exactly what was asked for.
        intent.outfit_mode = OutfitMode::Outfit;
        intent.required_categories = roles.to_vec();
        intent.requested_form = RequestedForm::FullLook;
        return;
    }
    intent.required_categories = intent.requested_form.roles().to_vec();
}

/// Capture garment nouns with their qualifier ("timberland boots",
/// "cargo trousers") as specific-item phrases.
fn collect_specific_items(normalized: &str) -> Vec<String> {
    let words: Vec<&str> = normalized.split(' ').filter(|w| !w.is_empty()).collect();
    let mut items = Vec::new();
    for (i, word) in words.iter().enumerate() {
        let is_garment = GARMENT_LEXICON.iter().any(|(g, _)| g == word);
        if !is_garment || i == 0 {
            continue;
        }
        let prev = words[i - 1];
        if STOPWORDS.contains(&prev)
            || COLOUR_LEXICON.iter().any(|(c, _)| c == &prev)
            || GARMENT_LEXICON.iter().any(|(g, _)| g == &prev)
        {
            continue;
        }
        let phrase = format!("{prev} {word}");
        if !items.contains(&phrase) {
            items.push(phrase);
        }
    }
    items
}
