pub mod aggregate;
pub mod facets;
pub mod filter;
pub mod normalize;

pub use aggregate::{Linkage, Species};
pub use facets::FacetIndex;
pub use filter::{filter_species, search_haystack, sort_for_display, FilterEvent, FilterState};
