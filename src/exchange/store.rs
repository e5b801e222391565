use std::collections::HashMap;
use std::sync::Mutex;
use std::time::SystemTime;

use log::debug;

use crate::exchange::{Exchange, ExchangeState};
use crate::models::ExchangeId;

/// In-memory exchange store keyed by identifier.
///
/// Interior mutability behind a single mutex; exchanges are small and
/// operations are O(1), so contention is a non-issue at this scale.
#[derive(Debug, Default)]
pub struct ExchangeStore {
    by_id: Mutex<HashMap<ExchangeId, Exchange>>,
}

impl ExchangeStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an exchange.
    pub fn put(&self, exchange: Exchange) {
        debug!("storing exchange {}", exchange.id);
        self.by_id
            .lock()
            .expect("exchange store lock poisoned")
            .insert(exchange.id, exchange);
    }

    /// Snapshot of an exchange, if present.
    pub fn get(&self, id: ExchangeId) -> Option<Exchange> {
        self.by_id
            .lock()
            .expect("exchange store lock poisoned")
            .get(&id)
            .cloned()
    }

    /// Run `f` against the stored exchange under the lock.
    pub fn with_mut<T>(&self, id: ExchangeId, f: impl FnOnce(&mut Exchange) -> T) -> Option<T> {
        self.by_id
            .lock()
            .expect("exchange store lock poisoned")
            .get_mut(&id)
            .map(f)
    }

    /// Number of stored exchanges.
    pub fn len(&self) -> usize {
        self.by_id
            .lock()
            .expect("exchange store lock poisoned")
            .len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every exchange that is expired as of `now`, marking overdue
    /// pending ones expired first. Returns how many were removed.
    pub fn purge_expired(&self, now: SystemTime) -> usize {
        let mut by_id = self.by_id.lock().expect("exchange store lock poisoned");
        let before = by_id.len();
        by_id.retain(|_, exchange| {
            exchange.expire(now);
            exchange.state() != ExchangeState::Expired
        });
        let removed = before - by_id.len();
        if removed > 0 {
            debug!("purged {removed} expired exchanges");
        }
        removed
    }
}
