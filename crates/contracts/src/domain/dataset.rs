use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::a001_species::aggregate::Species;
use super::a002_recommendation::aggregate::Recommendation;

/// The whole `data.json` document after normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub species: Vec<Species>,
    pub recommendations: Vec<Recommendation>,
}

impl Dataset {
    /// Parse and normalize the raw document text.
    ///
    /// The JSON parse is the only failure point of dataset loading. Past it,
    /// a missing or non-list `species` / `recommendations` field becomes an
    /// empty collection and every entry normalizes totally.
    pub fn from_json_str(text: &str) -> Result<Dataset, serde_json::Error> {
        let document: Value = serde_json::from_str(text)?;
        Ok(Dataset::from_document(&document))
    }

    /// Normalize an already-parsed document.
    pub fn from_document(document: &Value) -> Dataset {
        Dataset {
            species: entries(document, "species").iter().map(Species::from_raw).collect(),
            recommendations: entries(document, "recommendations")
                .iter()
                .map(Recommendation::from_raw)
                .collect(),
        }
    }
}

fn entries<'a>(document: &'a Value, field: &str) -> &'a [Value] {
    match document.get(field) {
        Some(Value::Array(items)) => items,
        _ => &[],
    }
}
