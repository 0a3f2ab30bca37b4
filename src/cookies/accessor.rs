//! Cookie get/set/delete helpers over a [`CookieStore`].
//!
//! Failures are silent: a store that rejects a write or cannot be read degrades to a
//! no-op or an empty string, mirroring how pages experience disabled cookies.

use crate::cookies::store::CookieStore;
use cookie::Cookie;
use time::{Duration, OffsetDateTime};

/// Every cookie written by the accessor is scoped to the site root.
pub const COOKIE_PATH: &str = "/";

const SECONDS_PER_DAY: i64 = 86_400;

/// Reads and writes named cookies through an injectable store.
#[derive(Debug, Clone)]
pub struct CookieAccessor<S> {
    store: S,
}

impl<S: CookieStore> CookieAccessor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write `name=value` at the root path, expiring after `days` when given.
    pub fn set(&self, name: &str, value: &str, days: Option<i64>) {
        self.set_at(name, value, days, OffsetDateTime::now_utc());
    }

    /// Like [`set`](Self::set), computing the expiry from `now`.
    pub fn set_at(&self, name: &str, value: &str, days: Option<i64>, now: OffsetDateTime) {
        let mut builder = Cookie::build((name, value)).path(COOKIE_PATH);

        if let Some(days) = days {
            match expiry_after(now, days) {
                Some(expires) => builder = builder.expires(expires),
                None => {
                    tracing::warn!(cookie = name, days, "cookie expiry out of range, writing session cookie")
                }
            }
        }

        let line = builder.build().to_string();
        tracing::debug!(cookie = %line, "writing cookie");

        if let Err(e) = self.store.assign(&line) {
            tracing::warn!(cookie = name, error = %e, "cookie write ignored");
        }
    }

    /// Value of the first cookie named `name`, or `""` when absent.
    pub fn get(&self, name: &str) -> String {
        let cookies = match self.store.cookie_string() {
            Ok(cookies) => cookies,
            Err(e) => {
                tracing::warn!(cookie = name, error = %e, "cookie read ignored");
                return String::new();
            }
        };

        find_cookie(&cookies, name).unwrap_or_default().to_string()
    }

    /// Remove `name` by overwriting it with an already-expired cookie.
    pub fn delete(&self, name: &str) {
        let line = Cookie::build((name, ""))
            .path(COOKIE_PATH)
            .expires(OffsetDateTime::UNIX_EPOCH)
            .build()
            .to_string();

        if let Err(e) = self.store.assign(&line) {
            tracing::warn!(cookie = name, error = %e, "cookie delete ignored");
        }
    }
}

/// Scan a `; `-separated cookie string for the first `name=` segment.
///
/// Leading spaces of each segment are stripped before comparing.
pub fn find_cookie<'a>(cookie_string: &'a str, name: &str) -> Option<&'a str> {
    let prefix = format!("{}=", name);

    cookie_string
        .split(';')
        .map(|segment| segment.trim_start_matches(' '))
        .find_map(|segment| segment.strip_prefix(prefix.as_str()))
}

fn expiry_after(now: OffsetDateTime, days: i64) -> Option<OffsetDateTime> {
    let seconds = days.checked_mul(SECONDS_PER_DAY)?;
    now.checked_add(Duration::seconds(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::store::{MemoryCookieStore, UnavailableCookieStore};

    #[test]
    fn test_find_cookie_strips_leading_spaces() {
        let cookies = "a=1;   token=xyz; b=2";
        assert_eq!(find_cookie(cookies, "token"), Some("xyz"));
        assert_eq!(find_cookie(cookies, "b"), Some("2"));
    }

    #[test]
    fn test_find_cookie_requires_full_name() {
        let cookies = "xtoken=nope; token=yes";
        assert_eq!(find_cookie(cookies, "token"), Some("yes"));
        assert_eq!(find_cookie(cookies, "oken"), None);
    }

    #[test]
    fn test_find_cookie_keeps_equals_in_value() {
        assert_eq!(find_cookie("q=a=b", "q"), Some("a=b"));
    }

    #[test]
    fn test_expiry_after_days() {
        let now = OffsetDateTime::UNIX_EPOCH;
        let expires = expiry_after(now, 2).unwrap();
        assert_eq!(expires.unix_timestamp(), 2 * 86_400);
        assert!(expiry_after(now, i64::MAX).is_none());
    }

    #[test]
    fn test_set_then_get() {
        let accessor = CookieAccessor::new(MemoryCookieStore::new());
        accessor.set("country", "ID", Some(7));
        assert_eq!(accessor.get("country"), "ID");
    }

    #[test]
    fn test_set_without_days_is_session_cookie() {
        let accessor = CookieAccessor::new(MemoryCookieStore::new());
        accessor.set("country", "MY", None);

        let cookies = accessor.store().live_cookies(OffsetDateTime::now_utc());
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0].path, COOKIE_PATH);
        assert!(cookies[0].expiration_time.is_none());
    }

    #[test]
    fn test_set_at_computes_expiry() {
        let accessor = CookieAccessor::new(MemoryCookieStore::new());
        let now = OffsetDateTime::now_utc();
        accessor.set_at("country", "TR", Some(3), now);

        let cookies = accessor.store().live_cookies(now);
        let expires = cookies[0].expiration_time.unwrap();
        // HTTP-dates carry whole seconds only
        assert_eq!(expires.unix_timestamp(), now.unix_timestamp() + 3 * 86_400);
    }

    #[test]
    fn test_delete() {
        let accessor = CookieAccessor::new(MemoryCookieStore::new());
        accessor.set("country", "ID", None);
        accessor.delete("country");
        assert_eq!(accessor.get("country"), "");
    }

    #[test]
    fn test_unavailable_store_is_silent() {
        let accessor = CookieAccessor::new(UnavailableCookieStore);
        accessor.set("country", "ID", Some(1));
        accessor.delete("country");
        assert_eq!(accessor.get("country"), "");
    }
}
