use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "slot-watch")]
#[command(about = "Polls booking APIs for free appointment slots and sends an SMS when one opens")]
pub struct CliArgs {
    /// Path to TOML configuration file; the built-in location list is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Override schedule.interval_seconds
    #[arg(long, value_name = "SECONDS")]
    pub interval: Option<u64>,

    /// Notify each opening only once while it stays available
    #[arg(long)]
    pub deduplicate: bool,

    /// Run a single cycle and exit
    #[arg(long, conflicts_with = "max_cycles")]
    pub once: bool,

    /// Stop after this many cycles
    #[arg(long)]
    pub max_cycles: Option<u64>,

    /// Log messages instead of sending SMS
    #[arg(long)]
    pub dry_run: bool,

    /// Log process CPU and memory after each cycle
    #[arg(long)]
    pub monitor: bool,
}

impl CliArgs {
    /// 載入設定檔（若有），再套用命令列覆蓋
    pub fn load_config(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(interval) = self.interval {
            config.schedule.interval_seconds = interval;
            tracing::info!("🔧 Poll interval overridden to {}s", interval);
        }
        if self.deduplicate {
            config.schedule.deduplicate = true;
        }
    }

    pub fn cycle_limit(&self) -> Option<u64> {
        if self.once {
            Some(1)
        } else {
            self.max_cycles
        }
    }
}
