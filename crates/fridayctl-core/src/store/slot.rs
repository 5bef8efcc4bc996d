// ── Single-slot async cache ──
//
// One nullable value per resource: `None` means "not fetched yet or
// explicitly invalidated", any `Some` is served until cleared. There is
// no TTL and no background refresh.

use std::future::Future;

use tokio::sync::Mutex;

/// A single-value cache for one REST resource.
///
/// The slot's mutex is held across the fetch, so concurrent first reads
/// collapse into one network request: the first caller fetches and
/// stores, later callers observe the stored value. A failed fetch
/// stores nothing and the next read retries.
pub struct CacheSlot<T> {
    slot: Mutex<Option<T>>,
}

impl<T> Default for CacheSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CacheSlot<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl<T: Clone> CacheSlot<T> {
    /// Return the cached value, fetching and storing it first if the
    /// slot is empty.
    pub async fn get_or_fetch<F, Fut, E>(&self, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut guard = self.slot.lock().await;
        if let Some(value) = guard.as_ref() {
            return Ok(value.clone());
        }

        let value = fetch().await?;
        *guard = Some(value.clone());
        Ok(value)
    }

    /// Empty the slot. The next read re-fetches.
    pub async fn clear(&self) {
        *self.slot.lock().await = None;
    }

    /// Apply an in-place edit to the cached value, if one is present.
    ///
    /// Used for optimistic updates after a confirmed write (e.g.
    /// appending a freshly recorded clip id) without a round-trip
    /// re-fetch. A miss is a no-op: an empty slot re-fetches anyway.
    pub async fn mutate(&self, edit: impl FnOnce(&mut T)) {
        if let Some(value) = self.slot.lock().await.as_mut() {
            edit(value);
        }
    }

    /// Current cached value, without fetching.
    pub async fn peek(&self) -> Option<T> {
        self.slot.lock().await.clone()
    }
}
