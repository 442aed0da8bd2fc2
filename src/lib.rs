//! Pulls country facts out of Wikipedia infoboxes.
//!
//! The flow per country is: resolve the common name, fetch the article, collect the infobox
//! rows, then run each field's cell through its normalizer. A field that can't be found or
//! parsed is `None`; it never stops the other fields from being read.

mod error;
mod macros;
pub mod normalize;
pub mod parse;
pub mod process;
pub mod request;
pub mod resolve;

pub use error::{Error, Result};

/// Articles are requested as `WIKI_URL_PREFIX` + title.
pub const WIKI_URL_PREFIX: &str = "https://en.wikipedia.org/wiki/";
/// The attribute table on a country article.
pub const INFOBOX_SELECTOR: &str = "table.infobox";
