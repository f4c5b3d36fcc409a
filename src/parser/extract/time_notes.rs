use crate::parser::patterns::{match_following_note, normalize_ws};

/// "Will begin immediately following ..." note, or empty.
pub fn extract(first_text: Option<&str>) -> String {
    first_text
        .and_then(match_following_note)
        .map(normalize_ws)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_up_to_next_dash() {
        assert_eq!(
            extract(Some(
                "January 20, 2026 - Will begin immediately following the Regular Meeting - Special Meeting"
            )),
            "Will begin immediately following the Regular Meeting"
        );
    }

    #[test]
    fn wrapped_note_is_collapsed() {
        assert_eq!(
            extract(Some(
                "January 20, 2026 - Will begin immediately following the\n      Regular Meeting - Workshop"
            )),
            "Will begin immediately following the Regular Meeting"
        );
    }

    #[test]
    fn empty_without_phrase() {
        assert_eq!(extract(Some("January 20, 2026 at 6:00 PM - Special Meeting")), "");
        assert_eq!(extract(None), "");
    }
}
