pub mod a001_species;
pub mod a002_recommendation;
pub mod common;
pub mod dataset;

pub use dataset::Dataset;
