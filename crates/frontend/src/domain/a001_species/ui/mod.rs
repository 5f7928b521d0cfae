pub mod details;
pub mod list;

pub use details::SpeciesDetails;
pub use list::SpeciesCatalog;
