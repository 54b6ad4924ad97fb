//! Catalog query engine: fabricates deterministic mock hardware-store
//! listings for a fixed set of three retailers.
//!
//! Prices derive from a character-sum of the query, names from title-casing
//! plus ordered keyword rules, and store metadata from one of two static
//! profile tables selected by location recognition. Nothing here performs
//! I/O; the only non-determinism is the random distance outside recognized
//! coverage areas, and that is injectable for tests.

pub mod rules;
pub mod store;
mod synth;
mod text;

pub use store::{CoverageArea, StoreId, StoreProfile};
pub use synth::{
    search_all_stores, search_all_stores_with_rng, synthesize_product,
    synthesize_product_with_rng,
};
