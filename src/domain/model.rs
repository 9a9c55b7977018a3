use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// 一個可預約的診所：輪詢端點與給使用者的預約連結
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub address: String,
    pub poll_url: String,
    pub booking_link: String,
}

impl Location {
    pub fn new(name: &str, address: &str, poll_url: &str, booking_link: &str) -> Self {
        Self {
            name: name.to_string(),
            address: address.to_string(),
            poll_url: poll_url.to_string(),
            booking_link: booking_link.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_tolerant_vec")]
    pub slots: Vec<Slot>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub when: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available: bool,
}

// API 偶爾以 null 代替空值，一律視為預設值
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_tolerant_vec<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}

/// Decodes a poll response body. A `null` body or `null` entries decode
/// as empty rather than failing.
pub fn decode_timeslots(body: &[u8]) -> serde_json::Result<Vec<TimeSlot>> {
    let timeslots = serde_json::from_slice::<Option<Vec<Option<TimeSlot>>>>(body)?;
    Ok(timeslots
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// 某地點的一個空檔，是通知與去重的單位
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotOpening {
    pub location_name: String,
    pub address: String,
    pub booking_link: String,
    pub date: String,
    pub when: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpeningKey {
    pub location_name: String,
    pub date: String,
    pub when: String,
}

impl SlotOpening {
    /// Every available slot in `timeslots`, in payload order. Repeats are kept.
    pub fn collect(location: &Location, timeslots: &[TimeSlot]) -> Vec<SlotOpening> {
        timeslots
            .iter()
            .flat_map(|timeslot| {
                timeslot
                    .slots
                    .iter()
                    .filter(|slot| slot.available)
                    .map(move |slot| SlotOpening {
                        location_name: location.name.clone(),
                        address: location.address.clone(),
                        booking_link: location.booking_link.clone(),
                        date: timeslot.date.clone(),
                        when: slot.when.clone(),
                    })
            })
            .collect()
    }

    pub fn key(&self) -> OpeningKey {
        OpeningKey {
            location_name: self.location_name.clone(),
            date: self.date.clone(),
            when: self.when.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFailure {
    pub location: String,
    pub error: String,
}

#[derive(Debug, Clone)]
pub struct CycleReport {
    pub started_at: DateTime<Utc>,
    pub sites_polled: usize,
    pub failures: Vec<SiteFailure>,
    pub openings_found: usize,
    pub notifications_sent: usize,
    pub notifications_failed: usize,
    pub notifications_suppressed: usize,
    pub duration: Duration,
}

impl CycleReport {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            sites_polled: 0,
            failures: Vec::new(),
            openings_found: 0,
            notifications_sent: 0,
            notifications_failed: 0,
            notifications_suppressed: 0,
            duration: Duration::ZERO,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.notifications_failed == 0
    }
}
