use thiserror::Error;

/// Failures setting up a spider. Per-row problems never surface here; they
/// degrade to empty fields or a skipped row instead.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid base url `{url}`: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid row selector `{selector}`: {reason}")]
    RowSelector { selector: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
