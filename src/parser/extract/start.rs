use chrono::{NaiveDateTime, NaiveTime};

use crate::parser::patterns::{match_date, match_time};

/// Start timestamp from the first-cell text, local to the spider's time zone.
/// `None` means the row has no usable date and must be skipped.
pub fn extract(first_text: Option<&str>) -> Option<NaiveDateTime> {
    let text = first_text?;
    let date = match_date(text)?;
    let time = match_time(text).unwrap_or(NaiveTime::MIN);
    Some(date.and_time(time))
}
