//! Small string helpers shared by synthesis and store metadata.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters percent-encoded when a query is embedded in a URL:
/// everything except unreserved characters and `/`, i.e. ordinary URL
/// path quoting (space becomes `%20`).
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

pub(crate) fn encode_query(query: &str) -> String {
    utf8_percent_encode(query, QUERY_ESCAPE).to_string()
}

/// Title-cases a string: a new word starts after any non-alphabetic
/// character; the first letter of each word is uppercased and the rest
/// lowercased. `"10ft COPPER pipe"` → `"10Ft Copper Pipe"`.
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
