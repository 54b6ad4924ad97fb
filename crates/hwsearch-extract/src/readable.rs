//! Main-text extraction from HTML documents.
//!
//! A lightweight stand-in for full readability extraction: block-level text
//! nodes (headings, paragraphs, list items) are collected in document order
//! and joined. Script, style, and navigation content never matches the
//! block selector, so it is dropped for free.

use scraper::{Html, Selector};

const BLOCK_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p, li, blockquote, pre";

/// Extracts the main readable text from an HTML document.
///
/// Returns `None` when the document contains no block-level text, including
/// non-HTML bodies and empty pages.
#[must_use]
pub fn extract_readable_text(html: &str) -> Option<String> {
    let selector = Selector::parse(BLOCK_SELECTOR).ok()?;
    let document = Html::parse_document(html);

    let mut blocks: Vec<String> = Vec::new();
    for element in document.select(&selector) {
        // Nested blocks (a <p> inside an <li>) yield their text twice, once
        // per ancestor. Skip elements that contain another block element and
        // let the innermost one contribute the text.
        if element.select(&selector).next().is_some() {
            continue;
        }
        let text = normalize_whitespace(element.text());
        if !text.is_empty() {
            blocks.push(text);
        }
    }

    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join("\n\n"))
    }
}

/// Joins text fragments on single spaces, collapsing runs of whitespace.
fn normalize_whitespace<'a, I: Iterator<Item = &'a str>>(fragments: I) -> String {
    let mut out = String::new();
    for fragment in fragments {
        for word in fragment.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
    }
    out
}
