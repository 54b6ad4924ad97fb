//! The fixed retailer set and its static per-area metadata.

use crate::text::encode_query;

/// One of the fixed, closed set of retailers known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreId {
    HomeDepot,
    Lowes,
    AceHardware,
}

/// Which store-profile table applies, decided by location recognition
/// (see [`crate::rules::recognize_area`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageArea {
    /// No recognized location; the default profile table applies and
    /// distances are randomized.
    Default,
    /// The Huffman, TX area; alternate addresses and fixed distances apply.
    HuffmanTx,
}

/// Static storefront metadata for one retailer in one coverage area.
#[derive(Debug, Clone, Copy)]
pub struct StoreProfile {
    pub name: &'static str,
    pub address: &'static str,
    /// Coordinates are carried as profile data for display or future
    /// distance math; they are not serialized into listings.
    pub latitude: f64,
    pub longitude: f64,
}

/// Profiles indexed by [`StoreId::ALL`] order.
const DEFAULT_PROFILES: [StoreProfile; 3] = [
    StoreProfile {
        name: "Home Depot",
        address: "3721 W Dublin Granville Rd, Columbus, OH 43235",
        latitude: 40.0852,
        longitude: -83.0882,
    },
    StoreProfile {
        name: "Lowe's",
        address: "2345 Silver Dr, Columbus, OH 43211",
        latitude: 40.0080,
        longitude: -82.9822,
    },
    StoreProfile {
        name: "Ace Hardware",
        address: "4780 Reed Rd, Columbus, OH 43220",
        latitude: 40.0595,
        longitude: -83.0513,
    },
];

const HUFFMAN_PROFILES: [StoreProfile; 3] = [
    StoreProfile {
        name: "Home Depot",
        address: "20360 Hwy 59 N, Humble, TX 77338",
        latitude: 30.0083,
        longitude: -95.2623,
    },
    StoreProfile {
        name: "Lowe's",
        address: "20201 Hwy 59 N, Humble, TX 77338",
        latitude: 30.0042,
        longitude: -95.2610,
    },
    StoreProfile {
        name: "Porter Ace Hardware",
        address: "23678 FM 1314, Porter, TX 77365",
        latitude: 30.0883,
        longitude: -95.3081,
    },
];

/// Approximate driving distances from Huffman, TX, indexed by
/// [`StoreId::ALL`] order.
const HUFFMAN_DISTANCES: [&str; 3] = ["14.5 miles", "14.2 miles", "18.7 miles"];

impl StoreId {
    /// Fixed iteration order for aggregated search; price ties preserve it.
    pub const ALL: [StoreId; 3] = [StoreId::HomeDepot, StoreId::Lowes, StoreId::AceHardware];

    /// Canonical slug for this store. `aceharware` keeps the historical
    /// spelling; callers that used it against earlier versions still work.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            StoreId::HomeDepot => "homedepot",
            StoreId::Lowes => "lowes",
            StoreId::AceHardware => "aceharware",
        }
    }

    /// Parses a store slug. Returns `None` for anything outside the fixed
    /// set; unknown stores are not an error at this layer.
    #[must_use]
    pub fn parse(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|store| store.slug() == slug)
    }

    /// Per-store multiplier applied to the query's base price.
    #[must_use]
    pub fn price_multiplier(self) -> f64 {
        match self {
            StoreId::HomeDepot => 1.0,
            StoreId::Lowes => 0.95,
            StoreId::AceHardware => 1.05,
        }
    }

    /// Storefront search-page URL embedding the percent-encoded query.
    #[must_use]
    pub fn search_url(self, query: &str) -> String {
        let encoded = encode_query(query);
        match self {
            StoreId::HomeDepot => format!("https://www.homedepot.com/s/{encoded}"),
            StoreId::Lowes => format!("https://www.lowes.com/search?searchTerm={encoded}"),
            StoreId::AceHardware => format!("https://www.acehardware.com/search?query={encoded}"),
        }
    }

    /// Profile for this store in the given coverage area.
    #[must_use]
    pub fn profile(self, area: CoverageArea) -> &'static StoreProfile {
        match area {
            CoverageArea::Default => &DEFAULT_PROFILES[self.index()],
            CoverageArea::HuffmanTx => &HUFFMAN_PROFILES[self.index()],
        }
    }

    /// Fixed distance string used when the location is recognized.
    #[must_use]
    pub fn fixed_distance(self) -> &'static str {
        HUFFMAN_DISTANCES[self.index()]
    }

    fn index(self) -> usize {
        match self {
            StoreId::HomeDepot => 0,
            StoreId::Lowes => 1,
            StoreId::AceHardware => 2,
        }
    }
}

impl std::fmt::Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_every_canonical_slug() {
        for store in StoreId::ALL {
            assert_eq!(StoreId::parse(store.slug()), Some(store));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_miscased_slugs() {
        assert_eq!(StoreId::parse("menards"), None);
        assert_eq!(StoreId::parse("HomeDepot"), None);
        // The corrected spelling is NOT in the fixed set.
        assert_eq!(StoreId::parse("acehardware"), None);
        assert_eq!(StoreId::parse(""), None);
    }

    #[test]
    fn profiles_differ_between_coverage_areas() {
        for store in StoreId::ALL {
            let default = store.profile(CoverageArea::Default);
            let huffman = store.profile(CoverageArea::HuffmanTx);
            assert_ne!(default.address, huffman.address);
        }
        assert_eq!(
            StoreId::AceHardware.profile(CoverageArea::HuffmanTx).name,
            "Porter Ace Hardware"
        );
    }

    #[test]
    fn profile_coordinates_match_the_storefronts() {
        let humble_hd = StoreId::HomeDepot.profile(CoverageArea::HuffmanTx);
        assert!((humble_hd.latitude - 30.0083).abs() < 1e-9);
        assert!((humble_hd.longitude - (-95.2623)).abs() < 1e-9);

        let columbus_ace = StoreId::AceHardware.profile(CoverageArea::Default);
        assert!((columbus_ace.latitude - 40.0595).abs() < 1e-9);
        assert!((columbus_ace.longitude - (-83.0513)).abs() < 1e-9);
    }

    #[test]
    fn fixed_distances_follow_store_order() {
        assert_eq!(StoreId::HomeDepot.fixed_distance(), "14.5 miles");
        assert_eq!(StoreId::Lowes.fixed_distance(), "14.2 miles");
        assert_eq!(StoreId::AceHardware.fixed_distance(), "18.7 miles");
    }

    #[test]
    fn search_url_encodes_the_query() {
        assert_eq!(
            StoreId::HomeDepot.search_url("light switch"),
            "https://www.homedepot.com/s/light%20switch"
        );
        assert_eq!(
            StoreId::Lowes.search_url("pipe"),
            "https://www.lowes.com/search?searchTerm=pipe"
        );
    }
}
