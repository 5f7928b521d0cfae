use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::text::{normalize_token, title_case};

/// Normalized token -> canonical part label. Compound keys cover cells like
/// "Root Rhizome" that name one part in two words.
static PART_LOOKUP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("bark", "Bark"),
        ("flower", "Flower"),
        ("fruit", "Fruit"),
        ("grain", "Grain"),
        ("grains", "Grain"),
        ("leaf", "Leaf"),
        ("leaves", "Leaf"),
        ("nut", "Nut & Kernel"),
        ("kernel", "Nut & Kernel"),
        ("nut kernel", "Nut & Kernel"),
        ("peel", "Peel & Pomace"),
        ("pomace", "Peel & Pomace"),
        ("pod", "Pod"),
        ("resin", "Resin & Gum"),
        ("gum", "Resin & Gum"),
        ("root", "Root & Rhizome"),
        ("rhizome", "Root & Rhizome"),
        ("root rhizome", "Root & Rhizome"),
        ("seed", "Seed"),
        ("shell", "Shell"),
        ("shoot", "Stem & Shoot"),
        ("stem", "Stem & Shoot"),
        ("stem shoot", "Stem & Shoot"),
        ("straw", "Straw"),
        ("thallus", "Whole Thallus"),
        ("wood", "Wood & Timber"),
        ("timber", "Wood & Timber"),
    ])
});

/// Display order for canonical parts; anything unknown sorts after these,
/// alphabetically.
const PART_ORDER: &[&str] = &[
    "Bark",
    "Flower",
    "Leaf",
    "Fruit",
    "Seed",
    "Root & Rhizome",
    "Stem & Shoot",
    "Wood & Timber",
    "Nut & Kernel",
    "Resin & Gum",
    "Grain",
    "Straw",
    "Pod",
    "Peel & Pomace",
    "Shell",
    "Whole Thallus",
];

/// Canonicalize the "Plant Parts Used" cell.
///
/// The cell separates parts with commas, slashes, semicolons or the word
/// "and". Each token maps through [`PART_LOOKUP`]; tokens the table does not
/// know keep their title-cased form so new parts surface in the data instead
/// of vanishing.
pub fn parse_parts(raw: &str) -> Vec<String> {
    let mut canonical: HashSet<String> = HashSet::new();
    for fragment in raw.split([',', ';', '/']) {
        let cleaned = normalize_token(fragment);
        if cleaned.is_empty() {
            continue;
        }
        for token in and_separated(&cleaned) {
            let part = match PART_LOOKUP.get(token.as_str()) {
                Some(label) => (*label).to_string(),
                None => title_case(&token),
            };
            canonical.insert(part);
        }
    }
    let mut parts: Vec<String> = canonical.into_iter().collect();
    parts.sort_by(|a, b| part_rank(a).cmp(&part_rank(b)).then_with(|| a.cmp(b)));
    parts
}

fn part_rank(part: &str) -> usize {
    PART_ORDER
        .iter()
        .position(|known| *known == part)
        .unwrap_or(PART_ORDER.len())
}

/// Split a normalized token on the standalone word "and". "sandalwood"
/// stays whole; "nut and kernel" yields two tokens.
fn and_separated(cleaned: &str) -> Vec<String> {
    let mut tokens: Vec<String> = vec![String::new()];
    for word in cleaned.split_whitespace() {
        if word == "and" {
            tokens.push(String::new());
            continue;
        }
        if let Some(current) = tokens.last_mut() {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
    }
    tokens.retain(|token| !token.is_empty());
    tokens
}
