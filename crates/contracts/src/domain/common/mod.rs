//! Helpers shared by every aggregate's normalization.

pub mod text;

pub use text::{clean_text, dedup_keep_order, string_list};
