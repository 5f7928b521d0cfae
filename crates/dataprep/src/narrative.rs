use contracts::domain::a001_species::aggregate::Linkage;

use crate::text::human_join;

/// One-line market strength summary shown on the species card.
///
/// Reads like "Mahua (NTFP) shows high volume potential and medium
/// commercial value across Kandhamal and Rayagada."
pub fn build_strength(
    name: &str,
    species_type: &str,
    volume: &str,
    commercial: &str,
    districts: &[String],
) -> String {
    let mut descriptors: Vec<String> = Vec::new();
    if !volume.is_empty() {
        descriptors.push(format!("{} volume potential", volume.to_lowercase()));
    }
    if !commercial.is_empty() {
        descriptors.push(format!("{} commercial value", commercial.to_lowercase()));
    }

    let mut sentence = format!("{} ({})", name, species_type);
    if !descriptors.is_empty() {
        sentence.push_str(&format!(" shows {}", descriptors.join(" and ")));
    }
    if !districts.is_empty() {
        sentence.push_str(&format!(" across {}", human_join(districts)));
    }
    sentence.push('.');
    sentence
}

/// Promotion rationale, fixed per value-chain orientation.
pub fn justification_for(linkage: Linkage) -> String {
    match linkage {
        Linkage::Backward => {
            "Strengthen cultivation, nurseries, and aggregation systems to stabilise supply."
        }
        Linkage::Forward => {
            "Invest in processing, packaging, and market development to capture premiums."
        }
        Linkage::Integrated => {
            "Coordinate both production and market-side interventions for balanced growth."
        }
    }
    .to_string()
}
