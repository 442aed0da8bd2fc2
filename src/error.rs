use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Failures that abort a country lookup.
///
/// A missing row or an unparseable cell is not an error: those come back as `None`
/// from the extractor and the normalizers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("The selector you are trying to scrape for is invalid. Selector: {0}")]
    ParseMissingSelector(String),

    #[error("Tokio Join Error, couldn't await the parsing task! {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
