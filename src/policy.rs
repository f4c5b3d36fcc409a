//! Status and identity derivation for assembled meetings.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::meeting::{Classification, MeetingStatus};

static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9^]+").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const CANCEL_WORDS: &[&str] = &["cancel", "rescheduled", "postpone"];

/// Lifecycle tag for a meeting relative to a caller-supplied reference time.
pub trait StatusPolicy {
    fn status(&self, start: NaiveDateTime, reference_time: NaiveDateTime) -> MeetingStatus;

    /// Same as [`status`](Self::status), letting the meeting's own wording
    /// (title, description) override the date-based answer.
    fn status_with_text(
        &self,
        start: NaiveDateTime,
        reference_time: NaiveDateTime,
        text: &str,
    ) -> MeetingStatus {
        let lower = text.to_lowercase();
        if CANCEL_WORDS.iter().any(|w| lower.contains(w)) {
            return MeetingStatus::Cancelled;
        }
        self.status(start, reference_time)
    }
}

/// Past meetings are `passed`, everything else `tentative`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateStatus;

impl StatusPolicy for DateStatus {
    fn status(&self, start: NaiveDateTime, reference_time: NaiveDateTime) -> MeetingStatus {
        if start < reference_time {
            MeetingStatus::Passed
        } else {
            MeetingStatus::Tentative
        }
    }
}

pub struct IdentityInput<'a> {
    pub source: &'a str,
    pub start: NaiveDateTime,
    pub classification: Classification,
    pub slug: &'a str,
}

/// Stable id for a meeting. Must not depend on anything outside `input`.
pub trait IdentityPolicy {
    fn id(&self, input: &IdentityInput<'_>) -> String;
}

/// `<source>/<YYYYMMDDHHMM>/<identifier>/<slug>`, identifier defaulting to `x`.
#[derive(Debug, Clone)]
pub struct PathIdentity {
    identifier: String,
}

impl PathIdentity {
    pub fn new(identifier: &str) -> Self {
        PathIdentity {
            identifier: identifier.replace('/', "-"),
        }
    }
}

impl Default for PathIdentity {
    fn default() -> Self {
        PathIdentity::new("x")
    }
}

impl IdentityPolicy for PathIdentity {
    fn id(&self, input: &IdentityInput<'_>) -> String {
        format!(
            "{}/{}/{}/{}",
            input.source,
            input.start.format("%Y%m%d%H%M"),
            self.identifier,
            input.slug
        )
    }
}

/// Lowercase, underscore-separated form of a title.
pub fn slugify(title: &str) -> String {
    let spaced = NON_SLUG_RE.replace_all(title, " ");
    WS_RE
        .replace_all(&spaced, "_")
        .to_lowercase()
        .trim_matches('_')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn slugs() {
        assert_eq!(slugify("Special Meeting"), "special_meeting");
        assert_eq!(
            slugify("  Board of Trustees: Budget Workshop! "),
            "board_of_trustees_budget_workshop"
        );
        assert_eq!(slugify("Pre-K  Hearing"), "pre_k_hearing");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn id_format() {
        let slug = slugify("Special Meeting");
        let input = IdentityInput {
            source: "fortx_Castleberry_ISD",
            start: at(2026, 1, 20, 18),
            classification: Classification::Board,
            slug: &slug,
        };
        let policy = PathIdentity::default();
        assert_eq!(policy.id(&input), "fortx_Castleberry_ISD/202601201800/x/special_meeting");
        assert_eq!(policy.id(&input), policy.id(&input));
        assert_eq!(
            PathIdentity::new("a/b").id(&input),
            "fortx_Castleberry_ISD/202601201800/a-b/special_meeting"
        );
    }

    #[test]
    fn status_against_reference() {
        let now = at(2026, 2, 2, 0);
        let policy = DateStatus;
        assert_eq!(policy.status(at(2026, 1, 20, 18), now), MeetingStatus::Passed);
        assert_eq!(policy.status(at(2026, 3, 1, 18), now), MeetingStatus::Tentative);
        assert_eq!(policy.status(now, now), MeetingStatus::Tentative);
        assert_eq!(
            policy.status(at(2026, 1, 20, 18), now),
            policy.status(at(2026, 1, 20, 18), now)
        );
    }

    #[test]
    fn cancellation_wording_wins() {
        let now = at(2026, 2, 2, 0);
        let policy = DateStatus;
        assert_eq!(
            policy.status_with_text(at(2026, 3, 1, 18), now, "CANCELLED - Regular Meeting"),
            MeetingStatus::Cancelled
        );
        assert_eq!(
            policy.status_with_text(at(2026, 1, 1, 18), now, "Meeting postponed"),
            MeetingStatus::Cancelled
        );
        assert_eq!(
            policy.status_with_text(at(2026, 1, 1, 18), now, "Regular Meeting"),
            MeetingStatus::Passed
        );
    }
}
