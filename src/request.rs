use reqwest::Client;

use crate::{info_time, Result};

/// Builds the article URL for a title under `base_url`. Wikipedia titles use underscores for
/// spaces.
pub fn article_url(base_url: &str, title: &str) -> String {
    format!("{base_url}{}", title.trim().replace(' ', "_"))
}

/// Requests an article and returns a `Result<String>` containing the HTML.
pub async fn request_article(client: &Client, base_url: &str, title: &str) -> Result<String> {
    request_page(client, &article_url(base_url, title)).await
}

/// Requests a page. A non-success status is an error, same as a failed connection.
pub async fn request_page(client: &Client, url: &str) -> Result<String> {
    info_time!("Requesting page: {url}");

    let res = client.get(url).send().await?.error_for_status()?;
    let html = res.text().await?;
    Ok(html)
}
