pub mod aggregate;

pub use aggregate::Recommendation;
