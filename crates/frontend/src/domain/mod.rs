pub mod a001_species;
pub mod a002_recommendation;
