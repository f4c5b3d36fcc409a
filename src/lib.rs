//! Meeting extraction for BoardBook-style listing pages: rows in, normalized
//! meeting records out.

pub mod config;
pub mod error;
pub mod meeting;
pub mod parser;
pub mod policy;
pub mod spider;

pub use config::SpiderConfig;
pub use error::ScrapeError;
pub use meeting::{Classification, Link, Location, Meeting, MeetingStatus};
pub use parser::assemble::RowOutcome;
pub use parser::tree::ListingPage;
pub use spider::Spider;
