use crate::core::{Location, SlotSource, TimeSlot};
use crate::domain::model::decode_timeslots;
use crate::utils::error::{Result, WatchError};
use async_trait::async_trait;
use reqwest::Client;

/// 以 GET 讀取預約 API 回傳的時段陣列
pub struct HttpSlotSource {
    client: Client,
}

impl HttpSlotSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SlotSource for HttpSlotSource {
    async fn fetch_timeslots(&self, location: &Location) -> Result<Vec<TimeSlot>> {
        tracing::debug!("Making API request to: {}", location.poll_url);
        let response = self.client.get(&location.poll_url).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(WatchError::UnexpectedStatus {
                endpoint: location.poll_url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        decode_timeslots(&body).map_err(|source| WatchError::DecodeError {
            endpoint: location.poll_url.clone(),
            source,
        })
    }
}
