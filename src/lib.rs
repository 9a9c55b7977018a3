pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use adapters::{
    build_http_client, dry_run::LogNotifier, http_source::HttpSlotSource,
    sms_gateway::SmsGatewayNotifier,
};
pub use config::TomlConfig;
pub use crate::core::{poller::SlotPoller, scheduler::CycleDriver};
pub use utils::error::{Result, WatchError};
