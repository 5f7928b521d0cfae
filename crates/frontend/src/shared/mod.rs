pub mod api;
pub mod icons;
