// HTTP client utilities
use crate::domain::error::TranslateError;
use reqwest::Client;
use std::time::Duration;

/// Create the HTTP client used for API calls, bounded by `timeout` overall
pub fn create_client(timeout: Duration) -> Result<Client, TranslateError> {
    Ok(Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(concat!("t/", env!("CARGO_PKG_VERSION")))
        .build()?)
}
