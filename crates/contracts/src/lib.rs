//! Shared pure types and logic for the species dashboard.
//!
//! Everything here is plain data plus total functions over it, so the same
//! code serves the wasm frontend and the native dataprep tool without
//! feature gates.

pub mod dashboards;
pub mod domain;
