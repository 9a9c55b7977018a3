// Adapters layer: concrete implementations of the domain ports over HTTP.

pub mod dry_run;
pub mod http_source;
pub mod sms_gateway;

use crate::config::toml_config::HttpConfig;
use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

pub fn build_http_client(http: &HttpConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(http.timeout_seconds))
        .user_agent(http.user_agent.as_str())
        .build()?;
    Ok(client)
}
