use serde_json::Value;

use super::aggregate::{
    Linkage, Species, DEFAULT_NAME, DEFAULT_PRODUCT_FOCUS, DEFAULT_SPECIES_TYPE,
};
use crate::domain::common::text::{clean_text, string_list};

impl Species {
    /// Build one canonical record from a raw dataset entry.
    ///
    /// Total over any JSON shape: a missing, null or wrongly-typed field
    /// degrades to its documented default instead of failing, so one bad
    /// entry can never take the whole dataset down.
    pub fn from_raw(raw: &Value) -> Species {
        Species {
            name: text_or(raw, "name", DEFAULT_NAME),
            botanical: text(raw, "botanical"),
            image: text(raw, "image"),
            species_type: text_or(raw, "speciesType", DEFAULT_SPECIES_TYPE),
            habitat: text(raw, "habitat"),
            conservation: text(raw, "conservation"),
            districts: list(raw, "districts"),
            parts_used: list(raw, "partsUsed"),
            products: list(raw, "products"),
            product_focus: text_or(raw, "productFocus", DEFAULT_PRODUCT_FOCUS),
            linkage: Linkage::parse_lossy(&text(raw, "linkage")),
            volume: text(raw, "volume"),
            commercial_value: text(raw, "commercialValue"),
            strength: text(raw, "strength"),
            justification: text(raw, "justification"),
        }
    }
}

fn text(raw: &Value, field: &str) -> String {
    match raw.get(field) {
        Some(value) => clean_text(value),
        None => String::new(),
    }
}

fn text_or(raw: &Value, field: &str, fallback: &str) -> String {
    let value = text(raw, field);
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

fn list(raw: &Value, field: &str) -> Vec<String> {
    match raw.get(field) {
        Some(value) => string_list(value),
        None => Vec::new(),
    }
}
