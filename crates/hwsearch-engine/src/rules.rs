//! Ordered rule tables for name suffixes and location recognition.
//!
//! Both are plain data so a new keyword or location token is one table row,
//! not a new branch in control flow.

use crate::store::CoverageArea;

/// Keyword → suffix rules, matched against the lowercased query in table
/// order; the first match wins and exactly one suffix is ever applied.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("switch", "Single Pole"),
    ("faucet", "Chrome Finish"),
    ("pipe", "10ft Length"),
];

/// Returns the name suffix for `query`, if any keyword rule matches.
#[must_use]
pub fn suffix_for_query(query: &str) -> Option<&'static str> {
    let lower = query.to_lowercase();
    SUFFIX_RULES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|&(_, suffix)| suffix)
}

/// How a location token is matched against the input string.
enum TokenMatch {
    /// Substring match against the lowercased location.
    CaseInsensitive(&'static str),
    /// Verbatim substring match (used for postal codes).
    Literal(&'static str),
}

/// Tokens that place a search in the Huffman, TX coverage area.
const HUFFMAN_TOKENS: &[TokenMatch] = &[
    TokenMatch::CaseInsensitive("huffman"),
    TokenMatch::Literal("77336"),
];

/// Decides which coverage area a location string falls in. A missing or
/// unrecognized location selects [`CoverageArea::Default`].
#[must_use]
pub fn recognize_area(location: Option<&str>) -> CoverageArea {
    let Some(location) = location else {
        return CoverageArea::Default;
    };
    let lower = location.to_lowercase();
    let recognized = HUFFMAN_TOKENS.iter().any(|token| match token {
        TokenMatch::CaseInsensitive(t) => lower.contains(t),
        TokenMatch::Literal(t) => location.contains(t),
    });
    if recognized {
        CoverageArea::HuffmanTx
    } else {
        CoverageArea::Default
    }
}
