use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;
use crate::meeting::Classification;

pub const DEFAULT_NAME: &str = "fortx_Castleberry_ISD";
pub const DEFAULT_AGENCY: &str = "Castleberry ISD Board";
pub const DEFAULT_TIMEZONE: &str = "America/Chicago";
pub const DEFAULT_START_URL: &str = "https://meetings.boardbook.org/Public/Organization/1090";
pub const DEFAULT_BASE_URL: &str = "https://meetings.boardbook.org";
pub const DEFAULT_ROW_SELECTOR: &str = "table tbody tr[class*='row-for-board']";

const ENV_PREFIX: &str = "MEETINGS";

/// Everything that identifies one listing source.
#[derive(Debug, Clone, Deserialize)]
pub struct SpiderConfig {
    pub name: String,
    pub agency: String,
    pub timezone: String,
    pub start_url: String,
    pub base_url: String,
    pub row_selector: String,
    pub classification: Classification,
}

impl Default for SpiderConfig {
    fn default() -> Self {
        SpiderConfig {
            name: DEFAULT_NAME.into(),
            agency: DEFAULT_AGENCY.into(),
            timezone: DEFAULT_TIMEZONE.into(),
            start_url: DEFAULT_START_URL.into(),
            base_url: DEFAULT_BASE_URL.into(),
            row_selector: DEFAULT_ROW_SELECTOR.into(),
            classification: Classification::Board,
        }
    }
}

impl SpiderConfig {
    /// Defaults, then `file` if given, then `MEETINGS_*` environment variables.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("name", DEFAULT_NAME)?
            .set_default("agency", DEFAULT_AGENCY)?
            .set_default("timezone", DEFAULT_TIMEZONE)?
            .set_default("start_url", DEFAULT_START_URL)?
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("row_selector", DEFAULT_ROW_SELECTOR)?
            .set_default("classification", Classification::Board.as_str())?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let cfg = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }
}
