//! Product synthesis: one fabricated listing per (query, store) pair.

use rand::Rng;
use sha2::{Digest, Sha256};

use hwsearch_core::Product;

use crate::rules::{recognize_area, suffix_for_query};
use crate::store::{CoverageArea, StoreId};
use crate::text::{encode_query, title_case};

/// Synthesizes the single mock listing for `query` at the store named by
/// `store_slug`, drawing any random distance from `rng`.
///
/// Returns an empty vec when the slug is outside the fixed store set;
/// unknown stores are not an error.
#[must_use]
pub fn synthesize_product_with_rng<R: Rng>(
    query: &str,
    store_slug: &str,
    location: Option<&str>,
    rng: &mut R,
) -> Vec<Product> {
    let Some(store) = StoreId::parse(store_slug) else {
        tracing::debug!(store_slug, "unknown store slug, returning no listings");
        return Vec::new();
    };
    let area = recognize_area(location);
    vec![synthesize(query, store, area, rng)]
}

/// As [`synthesize_product_with_rng`], with a thread-local generator.
#[must_use]
pub fn synthesize_product(query: &str, store_slug: &str, location: Option<&str>) -> Vec<Product> {
    synthesize_product_with_rng(query, store_slug, location, &mut rand::rng())
}

/// Searches every store in the fixed set and returns the aggregated
/// listings sorted ascending by price. The sort is stable, so price ties
/// keep the [`StoreId::ALL`] iteration order. Never fails; an empty query
/// synthesizes listings at the minimum base price.
#[must_use]
pub fn search_all_stores(query: &str, location: Option<&str>) -> Vec<Product> {
    search_all_stores_with_rng(query, location, &mut rand::rng())
}

/// As [`search_all_stores`], drawing random distances from `rng`.
#[must_use]
pub fn search_all_stores_with_rng<R: Rng>(
    query: &str,
    location: Option<&str>,
    rng: &mut R,
) -> Vec<Product> {
    let area = recognize_area(location);
    let mut results: Vec<Product> = StoreId::ALL
        .iter()
        .map(|&store| synthesize(query, store, area, rng))
        .collect();
    results.sort_by_key(|product| product.price);
    results
}

/// Builds the listing for one store. Every field is deterministic except
/// `distance`, which is random outside recognized coverage areas.
fn synthesize<R: Rng>(query: &str, store: StoreId, area: CoverageArea, rng: &mut R) -> Product {
    let profile = store.profile(area);
    let distance = match area {
        CoverageArea::HuffmanTx => store.fixed_distance().to_string(),
        // Draws below 9.95: anything at or above it would round to
        // "10.0 miles" under `{:.1}`, breaking the single-digit format.
        CoverageArea::Default => format!("{:.1} miles", rng.random_range(0.0..9.95)),
    };

    Product {
        id: product_id(store, query),
        name: product_name(query),
        price: price_for(query, store),
        in_stock: true,
        image: format!(
            "https://example.com/{}_{}.jpg",
            store.slug(),
            encode_query(query)
        ),
        description: format!(
            "Professional grade {} for residential and commercial use",
            query.to_lowercase()
        ),
        store: profile.name.to_string(),
        address: profile.address.to_string(),
        distance,
    }
}

/// Deterministic pseudo-price: `(sum of char codes) % 10000 + 1000`,
/// scaled by the store multiplier and rounded.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn price_for(query: &str, store: StoreId) -> i64 {
    let char_sum: u64 = query.chars().map(|c| u64::from(u32::from(c))).sum();
    let base = char_sum % 10_000 + 1_000;
    (base as f64 * store.price_multiplier()).round() as i64
}

fn product_name(query: &str) -> String {
    let titled = title_case(query);
    match suffix_for_query(query) {
        Some(suffix) => format!("{titled} - {suffix}"),
        None => titled,
    }
}

/// Opaque display id: SHA-256 of `{slug}_{query}`, first 8 bytes mod 10000.
/// Stable across processes, not unique, never used for lookups.
#[allow(clippy::cast_possible_wrap)]
fn product_id(store: StoreId, query: &str) -> i64 {
    let digest = Sha256::digest(format!("{}_{}", store.slug(), query));
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(prefix) % 10_000) as i64
}

#[cfg(test)]
#[path = "synth_test.rs"]
mod tests;
