use chrono::Utc;

use crate::types::TransactionId;

/// Hands out millisecond-timestamp ids that never repeat.
///
/// Two ids requested within the same millisecond (or after the clock stepped backwards) are
/// bumped past the last issued one, so bulk imports still get distinct ids.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: TransactionId
}

impl IdGenerator {
    /// Starts after `last`, typically the largest id already in the store.
    pub fn seeded(last: TransactionId) -> Self {
        Self { last }
    }

    pub fn next_id(&mut self) -> TransactionId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        self.next_at(now)
    }

    pub fn next_at(&mut self, now_millis: u64) -> TransactionId {
        let id = now_millis.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}
