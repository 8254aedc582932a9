//! Nonce generation for private requests
//!
//! Bittrex expects the `nonce` query parameter to grow with every private
//! call made for an account. Values are milliseconds since the Unix epoch,
//! bumped by one whenever the clock has not moved since the previous call.

use std::sync::atomic::{AtomicU64, Ordering};

/// Strictly increasing, clock-derived nonce source
///
/// Owned by a single client. Each value is `max(now_ms, previous + 1)`,
/// published with a compare-and-swap so that concurrent callers never
/// observe the same nonce.
#[derive(Debug)]
pub struct NonceGenerator {
    last: AtomicU64,
}

impl NonceGenerator {
    /// Create a generator seeded from the current clock
    pub fn new() -> Self {
        Self::starting_at(now_millis())
    }

    /// Create a generator whose first nonce is greater than `seed`
    pub fn starting_at(seed: u64) -> Self {
        Self {
            last: AtomicU64::new(seed),
        }
    }

    /// Produce the next nonce
    pub fn next_nonce(&self) -> u64 {
        let now = now_millis();
        let advance = |last: u64| now.max(last.saturating_add(1));

        // The closure always returns Some, so both arms carry the previous value
        let previous = match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(advance(last)))
        {
            Ok(previous) | Err(previous) => previous,
        };

        advance(previous)
    }

    /// The most recently issued nonce (or the seed if none was issued yet)
    pub fn last(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }
}

impl Default for NonceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn now_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}
