pub mod dedup;
pub mod message;
pub mod poller;
pub mod scheduler;

pub use crate::domain::model::{CycleReport, Location, Slot, SlotOpening, TimeSlot};
pub use crate::domain::ports::{ConfigProvider, Notifier, PollCycle, SiteFailurePolicy, SlotSource};
pub use crate::utils::error::Result;
