use crate::domain::model::OpeningKey;
use std::collections::HashSet;
use std::sync::Mutex;

/// 記錄已通知過的空檔，避免同一個時段每輪重複發送
#[derive(Debug, Default)]
pub struct NotificationLedger {
    seen: Mutex<HashSet<OpeningKey>>,
}

impl NotificationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &OpeningKey) -> bool {
        match self.seen.lock() {
            Ok(seen) => seen.contains(key),
            // 鎖中毒時寧可重發也不要漏發
            Err(_) => false,
        }
    }

    /// 只在通知成功送出後記錄，失敗的下一輪會再試
    pub fn record(&self, key: OpeningKey) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.insert(key);
        }
    }

    /// Forget openings that vanished from sites polled this cycle.
    /// Keys for sites that were not polled successfully are left alone.
    pub fn retain_current(&self, polled_sites: &HashSet<String>, current: &HashSet<OpeningKey>) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.retain(|key| !polled_sites.contains(&key.location_name) || current.contains(key));
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.seen.lock().map(|seen| seen.len()).unwrap_or(0)
    }
}
