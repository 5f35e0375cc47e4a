use crate::config::SourceConfig;
use crate::error::{FetchError, Result};
use reqwest::{Client, StatusCode};
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use tracing::debug;

/// Fetches directory listings and raw source files for a version label
pub struct SourceFetcher {
    client: Client,
    config: SourceConfig,
}

impl SourceFetcher {
    pub fn new(config: SourceConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .user_agent(concat!("semconvdiff/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .connect_timeout(config.timeout / 2)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Resolve the source file names present at `version`.
    ///
    /// An empty listing is treated like a failure and retried on the linear
    /// schedule of the configured [`RetryPolicy`](crate::RetryPolicy). Once
    /// attempts run out the last error is returned, or an empty list if the
    /// last attempt succeeded without finding anything. Fatal errors are
    /// returned immediately.
    pub async fn fetch_file_names(&self, version: &str) -> Result<Vec<String>> {
        let url = self.config.listing_url(version);
        let retry = self.config.retry;
        let mut attempt = 0u32;

        loop {
            let last_error = match self.try_fetch_file_names(&url).await {
                Ok(names) if !names.is_empty() => return Ok(names),
                Ok(_) => None,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => Some(e),
            };

            let reason = last_error
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "no files found".to_string());

            if !retry.should_retry(attempt) {
                debug!(
                    "Giving up requesting files. version: {}, err: {}, attempts: {}",
                    version,
                    reason,
                    attempt + 1
                );
                return match last_error {
                    Some(e) => Err(e),
                    None => Ok(Vec::new()),
                };
            }

            let delay = retry.delay_for(attempt);
            debug!(
                "Something went wrong while requesting files. version: {}, err: {}, retries {}, retrying in {:?}...",
                version, reason, attempt, delay
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    /// Download one file's raw text. Never retried.
    pub async fn fetch_source_file(&self, version: &str, file_name: &str) -> Result<String> {
        let url = self.config.raw_file_url(version, file_name);
        self.get_text(&url).await
    }

    async fn try_fetch_file_names(&self, url: &str) -> Result<Vec<String>> {
        let body = self.get_text(url).await?;
        let names = extract_file_names(&body, &self.config.extension)?;
        Ok(names.into_iter().collect())
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::StatusError {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}

/// Collect the distinct file names linked from a directory listing page.
///
/// Every `href` ending in `extension` contributes the segment after its last
/// `/`. A matching href without any `/` means the listing is not what we
/// expect and is reported as [`FetchError::InvalidUrl`].
pub fn extract_file_names(html: &str, extension: &str) -> Result<BTreeSet<String>> {
    let document = Html::parse_document(html);
    let href_selector = Selector::parse("[href]").expect("static selector is valid");

    let mut names = BTreeSet::new();
    for element in document.select(&href_selector) {
        if let Some(href) = element.value().attr("href")
            && href.ends_with(extension)
        {
            names.insert(extract_after_slash(href)?.to_string());
        }
    }

    Ok(names)
}

pub fn extract_after_slash(url: &str) -> Result<&str> {
    url.rsplit_once('/')
        .map(|(_, tail)| tail)
        .ok_or_else(|| {
            FetchError::InvalidUrl(format!("unable to extract file name after '/' for {}", url))
        })
}
