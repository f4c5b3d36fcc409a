//! Per-field extractors. Each is a pure function of one or two row cells and
//! falls back to its empty value when the markup doesn't cooperate.

pub mod links;
pub mod location;
pub mod start;
pub mod time_notes;
pub mod title;

/// The page URL, verbatim.
pub fn source(page_url: &str) -> String {
    page_url.to_string()
}
