use chrono::NaiveDateTime;
use scraper::Selector;
use url::Url;

use crate::config::SpiderConfig;
use crate::error::{Result, ScrapeError};
use crate::meeting::{Classification, Meeting};
use crate::parser::assemble::{self, RowOutcome};
use crate::parser::tree::ListingPage;
use crate::policy::{DateStatus, IdentityPolicy, PathIdentity, StatusPolicy};

/// A configured listing source plus the policies applied to its rows.
pub struct Spider<S = DateStatus, I = PathIdentity> {
    pub name: String,
    pub agency: String,
    pub timezone: String,
    pub start_url: String,
    pub base_url: Url,
    pub classification: Classification,
    row_selector: Selector,
    status: S,
    identity: I,
}

impl Spider {
    pub fn from_config(cfg: &SpiderConfig) -> Result<Self> {
        Spider::with_policies(cfg, DateStatus, PathIdentity::default())
    }
}

impl<S: StatusPolicy, I: IdentityPolicy> Spider<S, I> {
    pub fn with_policies(cfg: &SpiderConfig, status: S, identity: I) -> Result<Self> {
        let base_url = Url::parse(&cfg.base_url).map_err(|source| ScrapeError::BaseUrl {
            url: cfg.base_url.clone(),
            source,
        })?;
        let row_selector =
            Selector::parse(&cfg.row_selector).map_err(|e| ScrapeError::RowSelector {
                selector: cfg.row_selector.clone(),
                reason: e.to_string(),
            })?;

        Ok(Spider {
            name: cfg.name.clone(),
            agency: cfg.agency.clone(),
            timezone: cfg.timezone.clone(),
            start_url: cfg.start_url.clone(),
            base_url,
            classification: cfg.classification,
            row_selector,
            status,
            identity,
        })
    }

    pub fn status_policy(&self) -> &S {
        &self.status
    }

    pub fn identity_policy(&self) -> &I {
        &self.identity
    }

    /// What happened to every candidate row, in document order. Lazy.
    pub fn outcomes<'a>(
        &'a self,
        page: &'a ListingPage,
        page_url: &'a str,
        reference_time: NaiveDateTime,
    ) -> impl Iterator<Item = RowOutcome> + 'a {
        page.rows(&self.row_selector)
            .map(move |row| assemble::assemble_row(self, row, page_url, reference_time))
    }

    /// Meetings from every row that has a start date. Lazy.
    pub fn meetings<'a>(
        &'a self,
        page: &'a ListingPage,
        page_url: &'a str,
        reference_time: NaiveDateTime,
    ) -> impl Iterator<Item = Meeting> + 'a {
        self.outcomes(page, page_url, reference_time)
            .filter_map(RowOutcome::into_meeting)
    }
}
