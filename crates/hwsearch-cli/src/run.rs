//! Search invocation handler, separated from `main` so output is testable.

use std::io::Write;

use hwsearch_core::Product;

/// Printed verbatim when no query is given. Kept as a literal so the bytes
/// match the historical output exactly (note the space after the colon,
/// which compact serde_json output would drop).
const NO_QUERY_ERROR: &str = r#"{"error": "No search query provided"}"#;

/// Executes one search invocation and writes the JSON document to `out`.
///
/// A missing query is the only handled condition: it produces a compact
/// structured error object and a normal exit. Results are a pretty-printed
/// JSON array with 2-space indentation. An unknown `--store` slug prints an
/// empty array rather than failing.
///
/// # Errors
///
/// Returns an error only when writing to `out` fails.
pub(crate) fn run(
    query: Option<&str>,
    location: Option<&str>,
    store: Option<&str>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let Some(query) = query else {
        writeln!(out, "{NO_QUERY_ERROR}")?;
        return Ok(());
    };

    let results: Vec<Product> = match store {
        Some(slug) => hwsearch_engine::synthesize_product(query, slug, location),
        None => hwsearch_engine::search_all_stores(query, location),
    };

    tracing::debug!(query, listings = results.len(), "search complete");
    writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?;
    Ok(())
}
