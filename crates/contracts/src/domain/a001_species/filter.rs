use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::aggregate::{Linkage, Species};

// ============================================================================
// Filter state
// ============================================================================

/// Current control selections plus the free-text query.
///
/// `None` on a scalar field means "all". An empty `parts` set means no part
/// constraint, however that emptiness was reached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    #[serde(rename = "speciesType")]
    pub species_type: Option<String>,
    pub district: Option<String>,
    pub habitat: Option<String>,
    pub linkage: Option<Linkage>,
    pub parts: HashSet<String>,
}

/// One interaction with a filter control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// The search box content changed; the raw text replaces the query.
    Search(String),
    /// A select control changed; `None` is the "all" option.
    SpeciesType(Option<String>),
    District(Option<String>),
    Habitat(Option<String>),
    Linkage(Option<Linkage>),
    /// A part checkbox toggled.
    Part { name: String, selected: bool },
    /// The "All parts" shortcut: drops every part selection at once.
    AllParts,
}

impl FilterState {
    /// Fold one control event into the state. The caller re-filters and
    /// re-renders after every call; no partial evaluation happens here.
    pub fn apply(&mut self, event: FilterEvent) {
        match event {
            FilterEvent::Search(query) => self.search = query,
            FilterEvent::SpeciesType(value) => self.species_type = value,
            FilterEvent::District(value) => self.district = value,
            FilterEvent::Habitat(value) => self.habitat = value,
            FilterEvent::Linkage(value) => self.linkage = value,
            FilterEvent::Part { name, selected } => {
                if selected {
                    self.parts.insert(name);
                } else {
                    self.parts.remove(&name);
                }
            }
            FilterEvent::AllParts => self.parts.clear(),
        }
    }

    /// Number of controls holding a non-default selection. The whole parts
    /// set counts as one control. Drives the filter panel badge.
    pub fn active_count(&self) -> usize {
        let scalars = [
            self.species_type.is_some(),
            self.district.is_some(),
            self.habitat.is_some(),
            self.linkage.is_some(),
        ];
        scalars.iter().filter(|set| **set).count()
            + usize::from(!self.search.trim().is_empty())
            + usize::from(!self.parts.is_empty())
    }
}

// ============================================================================
// Predicate evaluation
// ============================================================================

/// Run the whole filter over the canonical collection, keeping dataset order.
pub fn filter_species<'a>(collection: &'a [Species], state: &FilterState) -> Vec<&'a Species> {
    let query = state.search.trim().to_lowercase();
    collection
        .iter()
        .filter(|species| matches(species, state, &query))
        .collect()
}

/// Alphabetical display order. The sort is stable, so records sharing a
/// lowercased name keep their dataset order.
pub fn sort_for_display(subset: &mut [&Species]) {
    subset.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
}

/// Conjunction of the six independent predicates. `query` arrives already
/// trimmed and lowercased.
fn matches(species: &Species, state: &FilterState, query: &str) -> bool {
    if let Some(species_type) = &state.species_type {
        if &species.species_type != species_type {
            return false;
        }
    }
    if let Some(district) = &state.district {
        if !species.districts.iter().any(|entry| entry == district) {
            return false;
        }
    }
    if let Some(habitat) = &state.habitat {
        if &species.habitat != habitat {
            return false;
        }
    }
    if let Some(linkage) = state.linkage {
        if species.linkage != linkage {
            return false;
        }
    }
    if !state.parts.is_empty() {
        let carries_all = state
            .parts
            .iter()
            .all(|part| species.parts_used.iter().any(|entry| entry == part));
        if !carries_all {
            return false;
        }
    }
    if !query.is_empty() && !search_haystack(species).contains(query) {
        return false;
    }
    true
}

/// The lowercased text the search predicate scans: every searchable field
/// joined by single spaces, in this fixed order. A query may therefore
/// straddle a field boundary through the joining space.
pub fn search_haystack(species: &Species) -> String {
    let districts = species.districts.join(" ");
    let parts_used = species.parts_used.join(" ");
    let products = species.products.join(" ");
    let fields: [&str; 12] = [
        &species.name,
        &species.botanical,
        &species.species_type,
        &species.habitat,
        &species.product_focus,
        &species.volume,
        &species.commercial_value,
        &species.strength,
        &species.justification,
        &districts,
        &parts_used,
        &products,
    ];
    fields.join(" ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Vec<Species> {
        vec![
            Species::from_raw(&json!({
                "name": "Wild Honey",
                "botanical": "Apis dorsata",
                "speciesType": "NTFP",
                "habitat": "Forest",
                "districts": ["Kandhamal", "Koraput"],
                "partsUsed": ["Honey", "Wax"],
                "products": ["Raw honey", "Candles"],
                "productFocus": "Food & Spices",
                "linkage": "Forward",
                "justification": "Used in dyeing and food trade"
            })),
            Species::from_raw(&json!({
                "name": "turmeric",
                "speciesType": "Agro-commodity",
                "habitat": "Farmland",
                "districts": ["Kandhamal"],
                "partsUsed": ["Rhizome"],
                "products": ["Powder"],
                "productFocus": "Food & Spices",
                "linkage": "Integrated"
            })),
            Species::from_raw(&json!({
                "name": "Sal Seed",
                "speciesType": "NTFP",
                "districts": ["Sundargarh"],
                "partsUsed": ["Seed", "Leaf"],
                "linkage": "Backward",
                "volume": "High seasonal volume"
            })),
        ]
    }

    fn names(subset: &[&Species]) -> Vec<String> {
        subset.iter().map(|species| species.name.clone()).collect()
    }

    #[test]
    fn test_default_state_keeps_everything() {
        let collection = fixture();
        let subset = filter_species(&collection, &FilterState::default());
        assert_eq!(subset.len(), 3);
    }

    #[test]
    fn test_predicates_are_and_composed() {
        let collection = fixture();
        let mut state = FilterState::default();
        state.species_type = Some("NTFP".to_string());
        assert_eq!(filter_species(&collection, &state).len(), 2);

        // Matches speciesType but not district, so it drops out.
        state.district = Some("Kandhamal".to_string());
        assert_eq!(names(&filter_species(&collection, &state)), vec!["Wild Honey"]);
    }

    #[test]
    fn test_district_matches_membership_not_equality() {
        let collection = fixture();
        let mut state = FilterState::default();
        state.district = Some("Koraput".to_string());
        assert_eq!(names(&filter_species(&collection, &state)), vec!["Wild Honey"]);

        state.district = Some("Kandha".to_string());
        assert!(filter_species(&collection, &state).is_empty());
    }

    #[test]
    fn test_habitat_is_exact_and_blank_never_matches() {
        let collection = fixture();
        let mut state = FilterState::default();
        state.habitat = Some("Forest".to_string());
        assert_eq!(names(&filter_species(&collection, &state)), vec!["Wild Honey"]);

        // Sal Seed has no recorded habitat; only an impossible selection
        // could target it and the facet list never offers one.
        state.habitat = Some("forest".to_string());
        assert!(filter_species(&collection, &state).is_empty());
    }

    #[test]
    fn test_linkage_matches_variant() {
        let collection = fixture();
        let mut state = FilterState::default();
        state.linkage = Some(Linkage::Backward);
        assert_eq!(names(&filter_species(&collection, &state)), vec!["Sal Seed"]);
    }

    #[test]
    fn test_parts_selection_is_conjunctive() {
        let collection = fixture();
        let mut state = FilterState::default();
        state.parts.insert("Honey".to_string());
        assert_eq!(filter_species(&collection, &state).len(), 1);

        // Both parts present on the record: still matches.
        state.parts.insert("Wax".to_string());
        assert_eq!(names(&filter_species(&collection, &state)), vec!["Wild Honey"]);

        // One selected part missing from the record: no match at all.
        state.parts.insert("Seed".to_string());
        assert!(filter_species(&collection, &state).is_empty());
    }

    #[test]
    fn test_empty_parts_set_means_no_constraint() {
        let collection = fixture();
        let mut state = FilterState::default();
        state.apply(FilterEvent::Part { name: "Seed".to_string(), selected: true });
        assert_eq!(filter_species(&collection, &state).len(), 1);

        state.apply(FilterEvent::Part { name: "Seed".to_string(), selected: false });
        assert_eq!(filter_species(&collection, &state).len(), 3);
    }

    #[test]
    fn test_all_parts_event_clears_the_set() {
        let mut state = FilterState::default();
        state.apply(FilterEvent::Part { name: "Seed".to_string(), selected: true });
        state.apply(FilterEvent::Part { name: "Leaf".to_string(), selected: true });
        state.apply(FilterEvent::AllParts);
        assert!(state.parts.is_empty());
        assert_eq!(filter_species(&fixture(), &state).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let collection = fixture();
        let mut state = FilterState::default();
        state.search = "DYE".to_string();
        assert_eq!(names(&filter_species(&collection, &state)), vec!["Wild Honey"]);
    }

    #[test]
    fn test_search_spans_every_field() {
        let collection = fixture();
        let mut state = FilterState::default();

        // botanical
        state.search = "dorsata".to_string();
        assert_eq!(filter_species(&collection, &state).len(), 1);

        // districts
        state.search = "sundargarh".to_string();
        assert_eq!(names(&filter_species(&collection, &state)), vec!["Sal Seed"]);

        // products
        state.search = "candles".to_string();
        assert_eq!(filter_species(&collection, &state).len(), 1);

        // volume narrative
        state.search = "seasonal".to_string();
        assert_eq!(names(&filter_species(&collection, &state)), vec!["Sal Seed"]);
    }

    #[test]
    fn test_blank_search_keeps_everything() {
        let collection = fixture();
        let mut state = FilterState::default();
        state.search = "   ".to_string();
        assert_eq!(filter_species(&collection, &state).len(), 3);
    }

    #[test]
    fn test_search_misses_return_empty_not_error() {
        let collection = fixture();
        let mut state = FilterState::default();
        state.search = "no such commodity".to_string();
        assert!(filter_species(&collection, &state).is_empty());
    }

    #[test]
    fn test_haystack_order_and_joining() {
        let species = Species::from_raw(&json!({
            "name": "A",
            "botanical": "B",
            "speciesType": "C",
            "habitat": "D",
            "productFocus": "E",
            "volume": "F",
            "commercialValue": "G",
            "strength": "H",
            "justification": "I",
            "districts": ["J", "K"],
            "partsUsed": ["L"],
            "products": ["M"]
        }));
        assert_eq!(search_haystack(&species), "a b c d e f g h i j k l m");
    }

    #[test]
    fn test_query_may_straddle_field_boundaries() {
        let species = vec![Species::from_raw(&json!({
            "name": "Amla",
            "botanical": "Phyllanthus emblica"
        }))];
        let mut state = FilterState::default();
        state.search = "amla phyllanthus".to_string();
        assert_eq!(filter_species(&species, &state).len(), 1);
    }

    #[test]
    fn test_sort_is_alphabetical_ignoring_case() {
        let collection = fixture();
        let mut subset = filter_species(&collection, &FilterState::default());
        sort_for_display(&mut subset);
        assert_eq!(names(&subset), vec!["Sal Seed", "turmeric", "Wild Honey"]);
    }

    #[test]
    fn test_sort_keeps_dataset_order_for_equal_names() {
        let collection = vec![
            Species::from_raw(&json!({"name": "Amla", "habitat": "first"})),
            Species::from_raw(&json!({"name": "amla", "habitat": "second"})),
        ];
        let mut subset = filter_species(&collection, &FilterState::default());
        sort_for_display(&mut subset);
        assert_eq!(subset[0].habitat, "first");
        assert_eq!(subset[1].habitat, "second");
    }

    #[test]
    fn test_scalar_events_replace_selection() {
        let mut state = FilterState::default();
        state.apply(FilterEvent::SpeciesType(Some("NTFP".to_string())));
        state.apply(FilterEvent::Habitat(Some("Forest".to_string())));
        assert_eq!(state.active_count(), 2);

        state.apply(FilterEvent::SpeciesType(None));
        assert_eq!(state.species_type, None);
        assert_eq!(state.active_count(), 1);

        state.apply(FilterEvent::Search("honey".to_string()));
        state.apply(FilterEvent::Search(String::new()));
        assert_eq!(state.active_count(), 1);
    }
}
