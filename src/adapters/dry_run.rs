use crate::core::Notifier;
use crate::utils::error::Result;
use async_trait::async_trait;

/// `--dry-run` 使用：只記錄訊息，不送出 SMS
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, message: &str) -> Result<()> {
        tracing::info!("📝 [dry-run] {}", message);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "dry-run"
    }
}
