use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::aggregate::Species;

/// Distinct option lists for the filter controls.
///
/// Built once from the full canonical collection and never rebuilt from a
/// filtered subset, so narrowing one control cannot hide another control's
/// options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetIndex {
    pub districts: Vec<String>,
    pub habitats: Vec<String>,
    pub parts: Vec<String>,
}

impl FacetIndex {
    pub fn build(collection: &[Species]) -> FacetIndex {
        let mut districts = HashSet::new();
        let mut habitats = HashSet::new();
        let mut parts = HashSet::new();
        for species in collection {
            districts.extend(species.districts.iter().cloned());
            if !species.habitat.is_empty() {
                habitats.insert(species.habitat.clone());
            }
            parts.extend(species.parts_used.iter().cloned());
        }
        FacetIndex {
            districts: sorted_options(districts),
            habitats: sorted_options(habitats),
            parts: sorted_options(parts),
        }
    }
}

/// Alphabetical, case-insensitive, with a codepoint tiebreak so equal
/// lowercased values still come out in a deterministic order.
fn sorted_options(values: HashSet<String>) -> Vec<String> {
    let mut options: Vec<String> = values.into_iter().collect();
    options.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    options
}
