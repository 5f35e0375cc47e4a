pub mod config;
pub mod error;
pub mod fetcher;
pub mod retry;

pub use config::SourceConfig;
pub use error::FetchError;
pub use fetcher::SourceFetcher;
pub use retry::RetryPolicy;
