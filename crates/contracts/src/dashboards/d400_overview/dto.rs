use serde::{Deserialize, Serialize};

use crate::domain::a001_species::aggregate::{Linkage, Species};

/// Label of the habitat bucket collecting records with no recorded habitat.
pub const UNSPECIFIED_HABITAT: &str = "Not specified";

/// One labelled chart bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountBucket {
    pub label: String,
    pub count: usize,
}

/// Aggregates behind the three overview charts.
///
/// Always computed from the full canonical collection. The charts are a
/// static overview of the dataset and never react to the active filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewStats {
    /// Per-linkage counts in the fixed order Backward, Forward, Integrated,
    /// zero-count categories included.
    #[serde(rename = "linkageCounts")]
    pub linkage_counts: Vec<CountBucket>,

    /// Per-species-type counts in first-seen dataset order.
    #[serde(rename = "speciesTypeCounts")]
    pub species_type_counts: Vec<CountBucket>,

    /// Per-habitat counts, most frequent first; blank habitats pool under
    /// [`UNSPECIFIED_HABITAT`].
    #[serde(rename = "habitatCounts")]
    pub habitat_counts: Vec<CountBucket>,
}

impl OverviewStats {
    pub fn compute(collection: &[Species]) -> OverviewStats {
        OverviewStats {
            linkage_counts: linkage_counts(collection),
            species_type_counts: species_type_counts(collection),
            habitat_counts: habitat_counts(collection),
        }
    }

    /// Largest count across one bucket list, never below 1 so bar widths
    /// divide cleanly even on an empty dataset.
    pub fn scale_max(buckets: &[CountBucket]) -> usize {
        buckets.iter().map(|bucket| bucket.count).max().unwrap_or(0).max(1)
    }
}

fn linkage_counts(collection: &[Species]) -> Vec<CountBucket> {
    Linkage::all()
        .iter()
        .map(|linkage| CountBucket {
            label: linkage.display_name().to_string(),
            count: collection.iter().filter(|species| species.linkage == *linkage).count(),
        })
        .collect()
}

fn species_type_counts(collection: &[Species]) -> Vec<CountBucket> {
    let mut buckets: Vec<CountBucket> = Vec::new();
    for species in collection {
        bump(&mut buckets, &species.species_type);
    }
    buckets
}

fn habitat_counts(collection: &[Species]) -> Vec<CountBucket> {
    let mut buckets: Vec<CountBucket> = Vec::new();
    for species in collection {
        let label = if species.habitat.is_empty() {
            UNSPECIFIED_HABITAT
        } else {
            species.habitat.as_str()
        };
        bump(&mut buckets, label);
    }
    // Stable sort: equal counts keep first-seen order.
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets
}

/// Linear scan keeps first-seen order without a side map; bucket counts
/// here stay in the dozens.
fn bump(buckets: &mut Vec<CountBucket>, label: &str) {
    match buckets.iter_mut().find(|bucket| bucket.label == label) {
        Some(bucket) => bucket.count += 1,
        None => buckets.push(CountBucket { label: label.to_string(), count: 1 }),
    }
}
