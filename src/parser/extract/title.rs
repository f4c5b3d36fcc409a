use crate::parser::patterns::normalize_ws;

const TITLE_DELIMITER: &str = " - ";

/// Meeting title from the first-cell text. A leading `"<date> - "` prefix is dropped.
pub fn extract(first_text: Option<&str>) -> String {
    let Some(text) = first_text else {
        return String::new();
    };
    let text = normalize_ws(text);
    match text.split_once(TITLE_DELIMITER) {
        Some((_, rest)) => rest.trim().to_string(),
        None => text,
    }
}
