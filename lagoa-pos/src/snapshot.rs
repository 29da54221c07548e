//! Single-use, timestamped fetch results
//!
//! Orchestrators never hold authoritative copies of remote state. A fetch
//! produces a [`Snapshot`] stamped with its fetch time; the decision that
//! needed it consumes it via [`Snapshot::into_inner`], so a stale copy cannot
//! silently outlive the decision it was fetched for.

use chrono::{DateTime, Duration, Utc};

/// A remotely-fetched value with its fetch timestamp
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    value: T,
    taken_at: DateTime<Utc>,
}

impl<T> Snapshot<T> {
    /// Wrap a freshly fetched value.
    pub fn now(value: T) -> Self {
        Self {
            value,
            taken_at: Utc::now(),
        }
    }

    /// When this snapshot was taken.
    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    /// Age of the snapshot.
    pub fn age(&self) -> Duration {
        Utc::now() - self.taken_at
    }

    /// Whether the snapshot is younger than `max_age`.
    ///
    /// Freshness is advisory: money-moving decisions re-fetch regardless,
    /// this only lets UIs prompt for a refresh early.
    pub fn is_fresh(&self, max_age: Duration) -> bool {
        self.age() <= max_age
    }

    /// Borrow the value for display or identity checks.
    pub fn peek(&self) -> &T {
        &self.value
    }

    /// Consume the snapshot for the one decision it was fetched for.
    pub fn into_inner(self) -> T {
        self.value
    }
}
