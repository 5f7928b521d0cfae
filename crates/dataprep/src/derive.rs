use contracts::domain::a001_species::aggregate::{Linkage, DEFAULT_PRODUCT_FOCUS};

use crate::text::{ascii_clean, title_case};

/// Keyword table for classifying the product mix into a value-chain focus.
/// Order matters: the first label with any keyword hit wins, so "tea" lands
/// in beverages even though wellness lists it too.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Beverages & Processed Foods",
        &[
            "juice", "squash", "wine", "jam", "jelly", "pickle", "candy", "chutney", "powder",
            "tea", "coffee", "snack", "sherbet", "churan",
        ],
    ),
    ("Extracts & Oils", &["oil", "attar", "distill", "extract", "resin"]),
    (
        "Medicinal & Wellness",
        &["medicine", "herbal", "supplement", "tonic", "tea", "remedy", "capsule"],
    ),
    ("Food Ingredients", &["flour", "grain", "millet", "cereal", "kernel", "seed"]),
    ("Fiber & Materials", &["wood", "timber", "fiber", "straw", "shell", "pod"]),
];

/// Volume / commercial-value narratives score high 3, medium 2, low 1;
/// anything else counts as medium.
fn grade_score(grade: &str) -> u8 {
    match grade.to_lowercase().as_str() {
        "high" => 3,
        "low" => 1,
        _ => 2,
    }
}

/// Derive the value-chain orientation from the two grade columns.
///
/// Both high means the chain already works end to end (Integrated). A value
/// grade above the volume grade means supply is the bottleneck (Backward);
/// the reverse means the market side lags (Forward). Equal grades below
/// high also read as Integrated.
pub fn determine_linkage(volume: &str, commercial: &str) -> Linkage {
    let volume_score = grade_score(volume);
    let value_score = grade_score(commercial);
    if volume_score >= 3 && value_score >= 3 {
        return Linkage::Integrated;
    }
    if volume_score < value_score {
        return Linkage::Backward;
    }
    if value_score < volume_score {
        return Linkage::Forward;
    }
    Linkage::Integrated
}

/// Any category mentioning "agro" is an agro-commodity; the rest are NTFPs.
pub fn determine_species_type(category: &str) -> String {
    if category.to_lowercase().contains("agro") {
        "Agro-commodity".to_string()
    } else {
        "NTFP".to_string()
    }
}

/// Classify the product mix by keyword.
pub fn determine_product_focus(products: &[String]) -> String {
    let joined = products
        .iter()
        .map(|product| product.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    for (label, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| joined.contains(keyword)) {
            return (*label).to_string();
        }
    }
    DEFAULT_PRODUCT_FOCUS.to_string()
}

/// Split a comma-separated cell, cleaning each entry and dropping blanks.
pub fn split_by_comma(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(ascii_clean)
        .filter(|entry| !entry.is_empty())
        .collect()
}

pub fn parse_products(raw: &str) -> Vec<String> {
    split_by_comma(raw)
}

/// Districts come back title-cased, deduplicated and sorted so every record
/// lists them in the same order the facet dropdown does.
pub fn parse_districts(raw: &str) -> Vec<String> {
    let mut districts: Vec<String> = split_by_comma(raw)
        .into_iter()
        .map(|district| title_case(&district))
        .collect();
    districts.sort();
    districts.dedup();
    districts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linkage_grid() {
        assert_eq!(determine_linkage("High", "High"), Linkage::Integrated);
        assert_eq!(determine_linkage("Low", "High"), Linkage::Backward);
        assert_eq!(determine_linkage("High", "Low"), Linkage::Forward);
        assert_eq!(determine_linkage("Medium", "Medium"), Linkage::Integrated);
        assert_eq!(determine_linkage("Medium", "High"), Linkage::Backward);
        assert_eq!(determine_linkage("High", "Medium"), Linkage::Forward);
    }

    #[test]
    fn test_unknown_grades_count_as_medium() {
        assert_eq!(determine_linkage("", ""), Linkage::Integrated);
        assert_eq!(determine_linkage("plentiful", "High"), Linkage::Backward);
    }

    #[test]
    fn test_species_type_keys_on_agro() {
        assert_eq!(determine_species_type("Agro-commodity"), "Agro-commodity");
        assert_eq!(determine_species_type("AGROFORESTRY"), "Agro-commodity");
        assert_eq!(determine_species_type("NTFP"), "NTFP");
        assert_eq!(determine_species_type(""), "NTFP");
    }

    #[test]
    fn test_product_focus_first_label_wins() {
        let products = vec!["Herbal tea".to_string()];
        // "tea" sits in both beverages and wellness; beverages is listed first.
        assert_eq!(determine_product_focus(&products), "Beverages & Processed Foods");

        let products = vec!["Cold-pressed oil".to_string()];
        assert_eq!(determine_product_focus(&products), "Extracts & Oils");

        let products = vec!["Brooms".to_string()];
        assert_eq!(determine_product_focus(&products), "Other Value Chain");

        assert_eq!(determine_product_focus(&[]), "Other Value Chain");
    }

    #[test]
    fn test_keywords_match_inside_words() {
        // "seedlings" carries "seed"; substring matching is intentional.
        let products = vec!["Seedlings".to_string()];
        assert_eq!(determine_product_focus(&products), "Food Ingredients");
    }

    #[test]
    fn test_districts_are_titled_sorted_distinct() {
        assert_eq!(
            parse_districts("koraput, KANDHAMAL,  koraput , rayagada"),
            vec!["Kandhamal", "Koraput", "Rayagada"]
        );
        assert!(parse_districts("").is_empty());
    }

    #[test]
    fn test_products_keep_cell_order() {
        assert_eq!(
            parse_products("Raw honey,  Wax candles , ,Balm"),
            vec!["Raw honey", "Wax candles", "Balm"]
        );
    }
}
