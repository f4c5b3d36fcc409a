use chrono::NaiveDateTime;
use tracing::debug;

use crate::meeting::Meeting;
use crate::parser::extract::{self, links, location, start, time_notes, title};
use crate::parser::patterns::normalize_ws;
use crate::parser::tree::Row;
use crate::policy::{slugify, IdentityInput, IdentityPolicy, StatusPolicy};
use crate::spider::Spider;

const DATE_CELL: usize = 0;
const LOCATION_CELL: usize = 1;
const LINKS_CELL: usize = 2;

/// Where a row ended up: dropped for lack of a start date, or a full meeting.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Skipped { text: String },
    Assembled(Meeting),
}

impl RowOutcome {
    pub fn into_meeting(self) -> Option<Meeting> {
        match self {
            RowOutcome::Assembled(m) => Some(m),
            RowOutcome::Skipped { .. } => None,
        }
    }
}

pub fn assemble_row<S: StatusPolicy, I: IdentityPolicy>(
    spider: &Spider<S, I>,
    row: Row<'_>,
    page_url: &str,
    reference_time: NaiveDateTime,
) -> RowOutcome {
    let date_cell = row.cell(DATE_CELL);
    let first_text = date_cell.first_text();

    let Some(start) = start::extract(first_text) else {
        let text = normalize_ws(&date_cell.text());
        debug!(%text, "skipping row without a start date");
        return RowOutcome::Skipped { text };
    };

    let location_cell = row.cell(LOCATION_CELL);
    let title = title::extract(first_text);
    let description = String::new();

    let status = spider.status_policy().status_with_text(
        start,
        reference_time,
        &format!("{} {}", title, description),
    );
    let slug = slugify(&title);
    let id = spider.identity_policy().id(&IdentityInput {
        source: &spider.name,
        start,
        classification: spider.classification,
        slug: &slug,
    });

    RowOutcome::Assembled(Meeting {
        time_notes: time_notes::extract(first_text),
        location: location::extract(&location_cell),
        links: links::extract(&location_cell, &row.cell(LINKS_CELL), &spider.base_url),
        source: extract::source(page_url),
        title,
        description,
        classification: spider.classification,
        start,
        end: None,
        all_day: false,
        status,
        id,
    })
}
