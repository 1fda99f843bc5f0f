use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::github::rate_limiter::RateLimiter;

pub struct Paginator<'a> {
    client: &'a Client,
    rate_limiter: &'a RateLimiter,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client, rate_limiter: &'a RateLimiter) -> Self {
        Self {
            client,
            rate_limiter,
        }
    }

    /// Collects every page until one comes back short or empty.
    ///
    /// A failure on the first page is returned as-is. A failure on a later
    /// page ends pagination and keeps what was already collected.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        base_url: &str,
        per_page: u32,
    ) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        let mut page = 1;

        loop {
            let separator = if base_url.contains('?') { "&" } else { "?" };
            let url = format!("{}{}per_page={}&page={}", base_url, separator, per_page, page);

            let items: Vec<T> = match self.fetch_page(&url).await {
                Ok(items) => items,
                Err(e) if page == 1 => return Err(e),
                Err(e) => {
                    tracing::warn!("Stopping pagination at page {}: {}", page, e);
                    break;
                }
            };

            let items_count = items.len();
            all_items.extend(items);

            if items_count < per_page as usize {
                break;
            }

            page += 1;
        }

        Ok(all_items)
    }

    async fn fetch_page<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        self.rate_limiter.check()?;

        tracing::debug!("Fetching: {}", url);
        let response = self.client.get(url).send().await?;
        self.rate_limiter.update_from_response(&response);

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch {}: {} - {}",
                url, status, body
            )));
        }

        Ok(response.json().await?)
    }
}
