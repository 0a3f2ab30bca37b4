//! Document cookie stores.
//!
//! A [`CookieStore`] is the ambient cookie string a page sees: reading it yields every live
//! cookie as `name=value` pairs, writing it applies one `Set-Cookie`-style line at a time.

use crate::base::pickererror::PickerError;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use time::OffsetDateTime;

/// The ambient key-value cookie string, behind an injectable interface.
pub trait CookieStore {
    /// Read all live cookies as `name=value` pairs joined by `"; "`.
    fn cookie_string(&self) -> Result<String, PickerError>;

    /// Apply one `name=value[; attr=...]` assignment.
    fn assign(&self, line: &str) -> Result<(), PickerError>;
}

impl<S: CookieStore + ?Sized> CookieStore for Arc<S> {
    fn cookie_string(&self) -> Result<String, PickerError> {
        (**self).cookie_string()
    }

    fn assign(&self, line: &str) -> Result<(), PickerError> {
        (**self).assign(line)
    }
}

impl<S: CookieStore + ?Sized> CookieStore for &S {
    fn cookie_string(&self) -> Result<String, PickerError> {
        (**self).cookie_string()
    }

    fn assign(&self, line: &str) -> Result<(), PickerError> {
        (**self).assign(line)
    }
}

/// A cookie as held by [`MemoryCookieStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub creation_time: OffsetDateTime,
    pub expiration_time: Option<OffsetDateTime>,
    sequence: u64,
}

impl DocumentCookie {
    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        self.expiration_time
            .is_some_and(|expiry| expiry <= current_time)
    }
}

/// In-memory document cookie jar keyed by `(name, path)`.
///
/// Unbounded by default. With [`with_max_cookies`](Self::with_max_cookies) set, a write that
/// pushes the jar over the cap evicts the oldest cookies first.
pub struct MemoryCookieStore {
    store: Arc<DashMap<(String, String), DocumentCookie>>,
    next_sequence: AtomicU64,
    max_cookies: Option<usize>,
}

impl Default for MemoryCookieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self {
            store: Arc::new(DashMap::new()),
            next_sequence: AtomicU64::new(0),
            max_cookies: None,
        }
    }

    /// Cap the jar at `max` cookies, evicting oldest-first.
    pub fn with_max_cookies(mut self, max: usize) -> Self {
        self.max_cookies = Some(max);
        self
    }

    /// Apply an assignment line as if it were written at `now`.
    pub fn assign_at(&self, line: &str, now: OffsetDateTime) -> Result<(), PickerError> {
        use cookie::Cookie;

        let parsed = Cookie::parse(line).map_err(|_| PickerError::invalid_cookie(line))?;
        if parsed.name().is_empty() {
            return Err(PickerError::invalid_cookie(line));
        }

        let path = parsed.path().unwrap_or("/").to_string();
        let key = (parsed.name().to_string(), path.clone());

        // Max-Age wins over Expires (RFC 6265 5.3 step 3); out-of-range ages never expire
        let expiration_time = match parsed.max_age() {
            Some(max_age) => now.checked_add(max_age),
            None => parsed.expires().and_then(|e| e.datetime()),
        };

        if expiration_time.is_some_and(|expiry| expiry <= now) {
            tracing::debug!(cookie = %key.0, path = %key.1, "removing expired cookie");
            self.store.remove(&key);
            return Ok(());
        }

        // Overwrites keep the original creation time
        let (creation_time, sequence) = match self.store.get(&key) {
            Some(existing) => (existing.creation_time, existing.sequence),
            None => (now, self.next_sequence.fetch_add(1, Ordering::Relaxed)),
        };

        let cookie = DocumentCookie {
            name: key.0.clone(),
            value: parsed.value().to_string(),
            path,
            creation_time,
            expiration_time,
            sequence,
        };

        self.store.insert(key, cookie);
        self.enforce_limit();
        Ok(())
    }

    /// Read the cookie string as it would appear at `now`.
    pub fn cookie_string_at(&self, now: OffsetDateTime) -> String {
        self.live_cookies(now)
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Live cookies sorted by path length (longest first) then creation order.
    pub fn live_cookies(&self, now: OffsetDateTime) -> Vec<DocumentCookie> {
        let mut result: Vec<DocumentCookie> = self
            .store
            .iter()
            .filter(|entry| !entry.value().is_expired(now))
            .map(|entry| entry.value().clone())
            .collect();

        result.sort_by(|a, b| {
            b.path
                .len()
                .cmp(&a.path.len())
                .then_with(|| a.creation_time.cmp(&b.creation_time))
                .then_with(|| a.sequence.cmp(&b.sequence))
        });

        result
    }

    /// Get total cookie count, expired entries included.
    pub fn total_cookie_count(&self) -> usize {
        self.store.len()
    }

    /// Evict the oldest cookies until the jar is within its cap.
    fn enforce_limit(&self) {
        let Some(max) = self.max_cookies else {
            return;
        };

        while self.store.len() > max {
            let oldest = self
                .store
                .iter()
                .min_by_key(|entry| (entry.value().creation_time, entry.value().sequence))
                .map(|entry| entry.key().clone());

            match oldest {
                Some(key) => {
                    tracing::debug!(cookie = %key.0, "evicting oldest cookie");
                    self.store.remove(&key);
                }
                None => break,
            }
        }
    }
}

impl CookieStore for MemoryCookieStore {
    fn cookie_string(&self) -> Result<String, PickerError> {
        Ok(self.cookie_string_at(OffsetDateTime::now_utc()))
    }

    fn assign(&self, line: &str) -> Result<(), PickerError> {
        self.assign_at(line, OffsetDateTime::now_utc())
    }
}

/// A store for platforms where cookies are disabled; every access fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableCookieStore;

impl CookieStore for UnavailableCookieStore {
    fn cookie_string(&self) -> Result<String, PickerError> {
        Err(PickerError::StoreUnavailable)
    }

    fn assign(&self, _line: &str) -> Result<(), PickerError> {
        Err(PickerError::StoreUnavailable)
    }
}
