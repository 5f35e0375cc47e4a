use crate::error::{FetchError, Result};
use crate::retry::RetryPolicy;
use std::time::Duration;
use url::Url;

pub const DEFAULT_LISTING_BASE_URL: &str =
    "https://github.com/open-telemetry/opentelemetry-collector/blob/semconv/v0.109.0/semconv";
pub const DEFAULT_RAW_BASE_URL: &str =
    "https://raw.githubusercontent.com/open-telemetry/opentelemetry-collector/semconv/v0.109.0/semconv";
pub const DEFAULT_EXTENSION: &str = ".go";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where source files are discovered and downloaded from
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// HTML directory listing, suffixed with `/{version}`
    pub listing_base_url: String,
    /// Raw file content, suffixed with `/{version}/{file}`
    pub raw_base_url: String,
    /// Only hrefs ending in this are treated as source files
    pub extension: String,
    pub retry: RetryPolicy,
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            listing_base_url: DEFAULT_LISTING_BASE_URL.to_string(),
            raw_base_url: DEFAULT_RAW_BASE_URL.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            retry: RetryPolicy::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SourceConfig {
    pub fn with_listing_base_url(mut self, url: impl Into<String>) -> Self {
        self.listing_base_url = url.into();
        self
    }

    pub fn with_raw_base_url(mut self, url: impl Into<String>) -> Self {
        self.raw_base_url = url.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("listing base URL", &self.listing_base_url),
            ("raw base URL", &self.raw_base_url),
        ] {
            Url::parse(value)
                .map_err(|e| FetchError::InvalidConfig(format!("{} '{}': {}", name, value, e)))?;
        }

        if self.extension.is_empty() {
            return Err(FetchError::InvalidConfig(
                "source file extension must not be empty".to_string(),
            ));
        }

        if self.retry.max_attempts == 0 {
            return Err(FetchError::InvalidConfig(
                "at least one listing attempt is required".to_string(),
            ));
        }

        Ok(())
    }

    pub fn listing_url(&self, version: &str) -> String {
        format!("{}/{}", self.listing_base_url.trim_end_matches('/'), version)
    }

    pub fn raw_file_url(&self, version: &str, file_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.raw_base_url.trim_end_matches('/'),
            version,
            file_name
        )
    }
}
