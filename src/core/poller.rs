use crate::core::dedup::NotificationLedger;
use crate::core::message::MessageTemplate;
use crate::core::{ConfigProvider, Notifier, PollCycle, SlotSource};
use crate::domain::model::{CycleReport, OpeningKey, SiteFailure, SlotOpening};
use crate::domain::ports::SiteFailurePolicy;
use crate::utils::error::{Result, WatchError};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::time::Instant;

pub struct SlotPoller<S: SlotSource, N: Notifier, C: ConfigProvider> {
    source: S,
    notifier: N,
    config: C,
    template: MessageTemplate,
    ledger: NotificationLedger,
}

impl<S: SlotSource, N: Notifier, C: ConfigProvider> SlotPoller<S, N, C> {
    pub fn new(source: S, notifier: N, config: C) -> Self {
        let template = MessageTemplate::new(config.message_template());
        Self {
            source,
            notifier,
            config,
            template,
            ledger: NotificationLedger::new(),
        }
    }

    /// Returns `true` when the notifier accepted the message.
    async fn deliver(&self, opening: &SlotOpening, report: &mut CycleReport) -> bool {
        let message = self.template.render(opening);
        tracing::debug!("Sending notification via {}: {}", self.notifier.name(), message);

        // 通知為盡力而為，失敗只記錄不中斷
        match self.notifier.notify(&message).await {
            Ok(()) => {
                report.notifications_sent += 1;
                true
            }
            Err(e) => {
                tracing::warn!(
                    "⚠️ Notification for {} {} at {} failed: {}",
                    opening.date,
                    opening.when,
                    opening.location_name,
                    e
                );
                report.notifications_failed += 1;
                false
            }
        }
    }
}

#[async_trait]
impl<S: SlotSource, N: Notifier, C: ConfigProvider> PollCycle for SlotPoller<S, N, C> {
    async fn run_cycle(&self) -> Result<CycleReport> {
        let started = Instant::now();
        let mut report = CycleReport::new(Utc::now());
        let deduplicate = self.config.deduplicate();
        let mut polled_sites = HashSet::new();
        let mut current: HashSet<OpeningKey> = HashSet::new();

        for location in self.config.locations() {
            tracing::info!("🔎 {}", location.name);

            let timeslots = match self.source.fetch_timeslots(location).await {
                Ok(timeslots) => timeslots,
                Err(e) => match self.config.failure_policy() {
                    SiteFailurePolicy::Skip => {
                        tracing::error!("❌ Polling {} failed: {}", location.name, e);
                        report.failures.push(SiteFailure {
                            location: location.name.clone(),
                            error: e.to_string(),
                        });
                        continue;
                    }
                    SiteFailurePolicy::Abort => {
                        return Err(WatchError::CycleAborted {
                            location: location.name.clone(),
                            source: Box::new(e),
                        });
                    }
                },
            };

            report.sites_polled += 1;
            polled_sites.insert(location.name.clone());

            let openings = SlotOpening::collect(location, &timeslots);
            tracing::debug!(
                "{} returned {} days, {} open slots",
                location.name,
                timeslots.len(),
                openings.len()
            );

            for opening in openings {
                report.openings_found += 1;

                if !deduplicate {
                    self.deliver(&opening, &mut report).await;
                    continue;
                }

                let key = opening.key();
                current.insert(key.clone());
                if self.ledger.contains(&key) {
                    report.notifications_suppressed += 1;
                    continue;
                }
                if self.deliver(&opening, &mut report).await {
                    self.ledger.record(key);
                }
            }
        }

        if deduplicate {
            self.ledger.retain_current(&polled_sites, &current);
        }

        report.duration = started.elapsed();
        Ok(report)
    }
}
