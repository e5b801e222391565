//! Short-lived exchanges: the sessions a human code names.
//!
//! An exchange is issued with a random identifier and a 10-minute lifetime,
//! and can be resolved exactly once before it expires. The codecs in
//! [`crate::code`] and [`crate::qr`] stay pure; all state lives here.

mod store;

pub use store::ExchangeStore;

use std::time::{Duration, SystemTime};

use serde::Serialize;

use crate::code::{self, WordList};
use crate::models::ExchangeId;

/// How long an exchange stays resolvable.
pub const EXCHANGE_TTL: Duration = Duration::from_secs(10 * 60);

/// Time source, injectable so expiry is testable.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> SystemTime;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Lifecycle of an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeState {
    /// Issued, not yet resolved or expired.
    Pending,
    /// Resolved exactly once while still live.
    Resolved,
    /// Passed its expiry without being resolved.
    Expired,
}

/// One issued exchange.
#[derive(Debug, Clone, Serialize)]
pub struct Exchange {
    /// The identifier the human code encodes.
    pub id: ExchangeId,
    state: ExchangeState,
    created_at: SystemTime,
    expires_at: SystemTime,
    resolved_at: Option<SystemTime>,
}

impl Exchange {
    /// Issue a pending exchange created at `now`.
    pub fn create(id: ExchangeId, now: SystemTime) -> Self {
        Self {
            id,
            state: ExchangeState::Pending,
            created_at: now,
            expires_at: now + EXCHANGE_TTL,
            resolved_at: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> ExchangeState {
        self.state
    }

    /// When the exchange was resolved, if it was.
    pub fn resolved_at(&self) -> Option<SystemTime> {
        self.resolved_at
    }

    /// When the exchange stops being resolvable.
    pub fn expires_at(&self) -> SystemTime {
        self.expires_at
    }

    /// Creation instant.
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Move a pending exchange past its expiry. Idempotent; resolved
    /// exchanges are left alone.
    pub fn expire(&mut self, now: SystemTime) {
        if self.state == ExchangeState::Pending && now >= self.expires_at {
            self.state = ExchangeState::Expired;
        }
    }

    /// Resolve a pending, unexpired exchange.
    pub fn resolve(&mut self, now: SystemTime) {
        if self.state != ExchangeState::Pending {
            return;
        }
        if now >= self.expires_at {
            self.state = ExchangeState::Expired;
            return;
        }
        self.state = ExchangeState::Resolved;
        self.resolved_at = Some(now);
    }
}

/// Outcome of a resolve attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The exchange was pending and is now resolved.
    Resolved {
        /// When it was resolved.
        resolved_at: SystemTime,
    },
    /// The exchange expired before it could be resolved.
    Expired,
    /// The exchange was already resolved once.
    AlreadyResolved,
    /// No exchange with that identifier exists.
    Missing,
}

/// Issue a new exchange: random identifier, stored pending, human code
/// returned alongside.
pub fn create_exchange(
    store: &ExchangeStore,
    clock: &impl Clock,
    words: &WordList,
) -> (Exchange, String) {
    let id = ExchangeId::random();
    let exchange = Exchange::create(id, clock.now());
    store.put(exchange.clone());
    let human_code = code::encode(&id, words);
    (exchange, human_code)
}

/// Resolve an exchange by identifier, classifying the outcome.
pub fn resolve_exchange(
    store: &ExchangeStore,
    clock: &impl Clock,
    id: ExchangeId,
) -> ResolveOutcome {
    let now = clock.now();
    store.with_mut(id, |exchange| {
        exchange.expire(now);
        match exchange.state() {
            ExchangeState::Expired => ResolveOutcome::Expired,
            ExchangeState::Resolved => ResolveOutcome::AlreadyResolved,
            ExchangeState::Pending => {
                exchange.resolve(now);
                match exchange.resolved_at() {
                    Some(resolved_at) => ResolveOutcome::Resolved { resolved_at },
                    None => ResolveOutcome::Expired,
                }
            }
        }
    })
    .unwrap_or(ResolveOutcome::Missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct ManualClock(Cell<SystemTime>);

    impl ManualClock {
        fn new() -> Self {
            Self(Cell::new(SystemTime::UNIX_EPOCH))
        }

        fn advance(&self, d: Duration) {
            self.0.set(self.0.get() + d);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> SystemTime {
            self.0.get()
        }
    }

    #[test]
    fn test_create_and_resolve() {
        let store = ExchangeStore::new();
        let clock = ManualClock::new();
        let (exchange, human_code) = create_exchange(&store, &clock, WordList::builtin());

        // the issued code decodes back to the stored identifier
        let decoded = code::decode(&human_code, WordList::builtin()).unwrap();
        assert_eq!(decoded.id, exchange.id);

        clock.advance(Duration::from_secs(60));
        match resolve_exchange(&store, &clock, exchange.id) {
            ResolveOutcome::Resolved { resolved_at } => {
                assert_eq!(resolved_at, clock.now());
            }
            other => panic!("expected Resolved, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_is_single_use() {
        let store = ExchangeStore::new();
        let clock = ManualClock::new();
        let (exchange, _) = create_exchange(&store, &clock, WordList::builtin());

        assert!(matches!(
            resolve_exchange(&store, &clock, exchange.id),
            ResolveOutcome::Resolved { .. }
        ));
        assert_eq!(
            resolve_exchange(&store, &clock, exchange.id),
            ResolveOutcome::AlreadyResolved
        );
    }

    #[test]
    fn test_resolve_after_expiry() {
        let store = ExchangeStore::new();
        let clock = ManualClock::new();
        let (exchange, _) = create_exchange(&store, &clock, WordList::builtin());

        clock.advance(EXCHANGE_TTL);
        assert_eq!(
            resolve_exchange(&store, &clock, exchange.id),
            ResolveOutcome::Expired
        );
    }

    #[test]
    fn test_resolve_missing() {
        let store = ExchangeStore::new();
        let clock = ManualClock::new();
        let id = ExchangeId::from_bytes([1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(resolve_exchange(&store, &clock, id), ResolveOutcome::Missing);
    }

    #[test]
    fn test_expire_leaves_resolved_alone() {
        let now = SystemTime::UNIX_EPOCH;
        let mut exchange = Exchange::create(ExchangeId::from_bytes([0; 7]), now);
        exchange.resolve(now + Duration::from_secs(1));
        assert_eq!(exchange.state(), ExchangeState::Resolved);
        exchange.expire(now + EXCHANGE_TTL * 2);
        assert_eq!(exchange.state(), ExchangeState::Resolved);
    }
}
