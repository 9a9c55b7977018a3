use crate::domain::model::{CycleReport, Location, TimeSlot};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 單一地點輪詢失敗時的處理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteFailurePolicy {
    /// Log the failure and continue with the next location.
    #[default]
    Skip,
    /// Stop the cycle and hand the error to the driver.
    Abort,
}

pub trait ConfigProvider: Send + Sync {
    fn locations(&self) -> &[Location];
    fn poll_interval(&self) -> Duration;
    fn deduplicate(&self) -> bool;
    fn failure_policy(&self) -> SiteFailurePolicy;
    fn message_template(&self) -> &str;
}

#[async_trait]
pub trait SlotSource: Send + Sync {
    async fn fetch_timeslots(&self, location: &Location) -> Result<Vec<TimeSlot>>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> Result<()>;

    fn name(&self) -> &'static str;
}

#[async_trait]
pub trait PollCycle: Send + Sync {
    async fn run_cycle(&self) -> Result<CycleReport>;
}
