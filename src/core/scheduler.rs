use crate::core::PollCycle;
use crate::utils::error::Result;
use crate::utils::monitor::ProcessMonitor;
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

/// Runs one poll cycle per tick. A cycle that overruns the period delays
/// the next tick instead of stacking another cycle behind it.
pub struct CycleDriver<P: PollCycle> {
    cycle: P,
    period: Duration,
    monitor: ProcessMonitor,
}

impl<P: PollCycle> CycleDriver<P> {
    pub fn new(cycle: P, period: Duration) -> Self {
        Self::new_with_monitoring(cycle, period, false)
    }

    pub fn new_with_monitoring(cycle: P, period: Duration, monitor_enabled: bool) -> Self {
        Self {
            cycle,
            period,
            monitor: ProcessMonitor::new(monitor_enabled),
        }
    }

    /// 執行到 `max_cycles` 或 `shutdown` 完成為止，回傳完成的輪數。
    /// 進行中的一輪不會被中斷。
    pub async fn run_until<F>(&self, max_cycles: Option<u64>, shutdown: F) -> Result<u64>
    where
        F: Future<Output = ()>,
    {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut completed = 0u64;
        loop {
            if max_cycles.is_some_and(|max| completed >= max) {
                break;
            }

            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    tracing::info!("🛑 Shutdown requested, stopping after {} cycles", completed);
                    break;
                }
                _ = ticker.tick() => {}
            }

            tracing::info!("⏰ Wake up, time to search...");
            let report = self.cycle.run_cycle().await?;
            completed += 1;

            tracing::info!(
                sites = report.sites_polled,
                failed = report.failures.len(),
                openings = report.openings_found,
                sent = report.notifications_sent,
                suppressed = report.notifications_suppressed,
                "Search complete in {:?}, go back to sleep...",
                report.duration
            );
            if !report.is_clean() {
                tracing::warn!(
                    "⚠️ Cycle {} had {} site failures and {} failed notifications",
                    completed,
                    report.failures.len(),
                    report.notifications_failed
                );
            }
            self.monitor.log_cycle(completed);
        }

        Ok(completed)
    }

    pub async fn run(&self, max_cycles: Option<u64>) -> Result<u64> {
        self.run_until(max_cycles, std::future::pending()).await
    }
}
