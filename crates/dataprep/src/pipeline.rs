use std::path::Path;

use anyhow::Result;
use contracts::domain::a001_species::aggregate::{Species, DEFAULT_NAME};
use contracts::domain::dataset::Dataset;

use crate::derive::{
    determine_linkage, determine_product_focus, determine_species_type, parse_districts,
    parse_products,
};
use crate::narrative::{build_strength, justification_for};
use crate::parts::parse_parts;
use crate::recommend::build_recommendations;
use crate::text::{ascii_clean, slugify};

/// Read the survey CSV and produce the normalized dataset.
pub fn run(input: &Path) -> Result<Dataset> {
    if !input.exists() {
        anyhow::bail!("CSV file not found at {}", input.display());
    }
    tracing::info!("Reading survey rows from {}", input.display());
    let csv_text = std::fs::read_to_string(input)?;
    dataset_from_csv_text(&csv_text)
}

/// Transform CSV text into canonical species records plus the derived
/// recommendation blocks.
pub fn dataset_from_csv_text(csv_text: &str) -> Result<Dataset> {
    // Strip UTF-8 BOM if present
    let text = csv_text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            anyhow::bail!("Failed to read CSV headers: {}", e);
        }
    };

    let mut species: Vec<Species> = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Skipping malformed CSV record: {}", e);
                skipped += 1;
                continue;
            }
        };

        // Get a cleaned cell by header name, case-insensitive.
        let get_field = |name: &str| -> String {
            headers
                .iter()
                .position(|header| header.eq_ignore_ascii_case(name))
                .and_then(|index| record.get(index))
                .map(ascii_clean)
                .unwrap_or_default()
        };

        species.push(species_from_row(&get_field));
    }

    if skipped > 0 {
        tracing::warn!("Skipped {} malformed rows", skipped);
    }
    tracing::info!("Normalized {} species records", species.len());

    let recommendations = build_recommendations(&species);
    Ok(Dataset { species, recommendations })
}

/// Assemble one canonical record from the survey columns, applying every
/// derivation rule and default.
fn species_from_row(get_field: &dyn Fn(&str) -> String) -> Species {
    let common_name = get_field("Common Name");
    let botanical = get_field("Scientific Name");
    let name = if !common_name.is_empty() {
        common_name
    } else if !botanical.is_empty() {
        botanical.clone()
    } else {
        DEFAULT_NAME.to_string()
    };

    let category = non_empty_or(get_field("CATEGORY"), "NTFP");
    let volume = non_empty_or(get_field("Volume"), "Medium");
    let commercial = non_empty_or(get_field("Commercial Value"), "Medium");

    let species_type = determine_species_type(&category);
    let districts = parse_districts(&get_field("Districts"));
    let products = parse_products(&get_field("Products"));
    let parts_used = parse_parts(&get_field("Plant Parts Used"));
    let linkage = determine_linkage(&volume, &commercial);

    let strength = build_strength(&name, &species_type, &volume, &commercial, &districts);
    let image = format!("images/{}.jpg", slugify(&name));

    Species {
        product_focus: determine_product_focus(&products),
        justification: justification_for(linkage),
        habitat: get_field("HABITAT"),
        conservation: get_field("Conservation Status"),
        name,
        botanical,
        image,
        species_type,
        districts,
        parts_used,
        products,
        linkage,
        volume,
        commercial_value: commercial,
        strength,
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}
