//! Prompt and token normalization.
//!
//! Matching is substring-based over lowercased, diacritic-stripped text
//! with punctuation collapsed to spaces, on both sides of every comparison.

/// Normalize free text: lowercase, strip diacritics, collapse punctuation
/// and runs of whitespace into single spaces.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_space = true;
    for ch in text.chars() {
        let ch = fold_diacritic(ch);
        if ch.is_alphanumeric() {
            for c in ch.to_lowercase() {
                out.push(c);
            }
            last_space = false;
        } else if !last_space {
            out.push(' ');
            last_space = true;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Normalize and split into deduplicated tokens, preserving first-seen order.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for tok in normalize(text).split(' ') {
        if !tok.is_empty() && !tokens.iter().any(|t| t == tok) {
            tokens.push(tok.to_string());
        }
    }
    tokens
}

/// Normalize a list of phrases into one deduplicated token list.
pub fn tokenize_all<S: AsRef<str>>(phrases: &[S]) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for phrase in phrases {
        for tok in tokenize(phrase.as_ref()) {
            if !tokens.contains(&tok) {
                tokens.push(tok);
            }
        }
    }
    tokens
}

/// Fold common Latin diacritics to their base letter. Team and brand names
/// in prompts are overwhelmingly Latin-script ("Barça", "São Paulo").
fn fold_diacritic(ch: char) -> char {
    match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'a',
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        'ñ' | 'Ñ' => 'n',
        'ý' | 'ÿ' | 'Ý' => 'y',
        'š' | 'Š' => 's',
        'ž' | 'Ž' => 'z',
        other => other,
    }
}
