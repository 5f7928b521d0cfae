use serde::{Deserialize, Serialize};

// ============================================================================
// Normalization defaults
// ============================================================================

/// Name shown when a record arrives without one.
pub const DEFAULT_NAME: &str = "Unnamed Commodity";
/// Species type applied when the column is blank.
pub const DEFAULT_SPECIES_TYPE: &str = "NTFP";
/// Product focus applied when no category keyword matches.
pub const DEFAULT_PRODUCT_FOCUS: &str = "Other Value Chain";

// ============================================================================
// Linkage
// ============================================================================

/// Value-chain orientation of a commodity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Linkage {
    Backward,
    Forward,
    Integrated,
}

impl Linkage {
    /// The fixed category order used by the overview charts.
    pub fn all() -> [Linkage; 3] {
        [Linkage::Backward, Linkage::Forward, Linkage::Integrated]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Linkage::Backward => "Backward",
            Linkage::Forward => "Forward",
            Linkage::Integrated => "Integrated",
        }
    }

    pub fn code(&self) -> &'static str {
        self.display_name()
    }

    /// Strict parse of a select-control value.
    pub fn from_code(code: &str) -> Option<Linkage> {
        match code {
            "Backward" => Some(Linkage::Backward),
            "Forward" => Some(Linkage::Forward),
            "Integrated" => Some(Linkage::Integrated),
            _ => None,
        }
    }

    /// Lossy parse used by normalization. Matching ignores case and
    /// surrounding whitespace; anything unrecognized, blanks included,
    /// becomes `Integrated` without a warning.
    pub fn parse_lossy(raw: &str) -> Linkage {
        match raw.trim().to_lowercase().as_str() {
            "backward" => Linkage::Backward,
            "forward" => Linkage::Forward,
            _ => Linkage::Integrated,
        }
    }
}

impl Default for Linkage {
    fn default() -> Self {
        Linkage::Integrated
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// One commodity entry after normalization, with every default applied.
///
/// Serde names match the wire names of `data.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    /// Common trade name
    pub name: String,

    /// Botanical (Latin) name, empty when unknown
    pub botanical: String,

    /// Relative path of the card image, e.g. `images/wild-honey.jpg`
    pub image: String,

    /// Commodity class: `NTFP` or `Agro-commodity`
    #[serde(rename = "speciesType")]
    pub species_type: String,

    /// Free-text habitat description, empty when not recorded
    pub habitat: String,

    /// Conservation status text, empty when not recorded
    pub conservation: String,

    /// Districts of occurrence
    pub districts: Vec<String>,

    /// Harvested parts, canonicalized
    #[serde(rename = "partsUsed")]
    pub parts_used: Vec<String>,

    /// Marketable products
    pub products: Vec<String>,

    /// Value-chain category, e.g. `Medicinal & Wellness`
    #[serde(rename = "productFocus")]
    pub product_focus: String,

    /// Value-chain orientation
    pub linkage: Linkage,

    /// Trade volume narrative
    pub volume: String,

    /// Commercial value narrative
    #[serde(rename = "commercialValue")]
    pub commercial_value: String,

    /// Market strength summary
    pub strength: String,

    /// Promotion rationale
    pub justification: String,
}

impl Species {
    /// True when the record carries a usable botanical name.
    pub fn has_botanical(&self) -> bool {
        !self.botanical.is_empty()
    }

    /// Two-letter monogram for the image placeholder, from the first
    /// letters of the first two words of the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(|letter| letter.to_uppercase())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lossy_ignores_case_and_whitespace() {
        assert_eq!(Linkage::parse_lossy("backward"), Linkage::Backward);
        assert_eq!(Linkage::parse_lossy("  FORWARD "), Linkage::Forward);
        assert_eq!(Linkage::parse_lossy("bAcKwArD"), Linkage::Backward);
    }

    #[test]
    fn test_parse_lossy_falls_back_to_integrated() {
        assert_eq!(Linkage::parse_lossy(""), Linkage::Integrated);
        assert_eq!(Linkage::parse_lossy("sideways"), Linkage::Integrated);
        assert_eq!(Linkage::parse_lossy("integrated"), Linkage::Integrated);
    }

    #[test]
    fn test_from_code_is_strict() {
        assert_eq!(Linkage::from_code("Forward"), Some(Linkage::Forward));
        assert_eq!(Linkage::from_code("forward"), None);
        assert_eq!(Linkage::from_code(""), None);
    }

    #[test]
    fn test_all_keeps_chart_order() {
        let labels: Vec<&str> = Linkage::all().iter().map(|l| l.display_name()).collect();
        assert_eq!(labels, vec!["Backward", "Forward", "Integrated"]);
    }

    #[test]
    fn test_initials_takes_first_two_words() {
        let mut species = Species {
            name: "wild honey".to_string(),
            botanical: String::new(),
            image: String::new(),
            species_type: String::new(),
            habitat: String::new(),
            conservation: String::new(),
            districts: vec![],
            parts_used: vec![],
            products: vec![],
            product_focus: String::new(),
            linkage: Linkage::Integrated,
            volume: String::new(),
            commercial_value: String::new(),
            strength: String::new(),
            justification: String::new(),
        };
        assert_eq!(species.initials(), "WH");
        species.name = "Turmeric".to_string();
        assert_eq!(species.initials(), "T");
    }
}
