use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard};

type Slot<V> = Arc<Mutex<Option<Arc<V>>>>;

/// On-demand page initialization.
///
/// The first successful `get_or_try_load` for a key stores the loaded value;
/// every later call for that key returns the same `Arc`. Concurrent first
/// accesses for one key wait on the slot and run the loader once. A failed
/// load stores nothing, so the next access tries again.
pub struct PageCache<K, V> {
    slots: Mutex<HashMap<K, Slot<V>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<K: Eq + Hash + Clone + std::fmt::Debug, V> PageCache<K, V> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn get_or_try_load<E>(
        &self,
        key: &K,
        load: impl FnOnce() -> Result<V, E>,
    ) -> Result<Arc<V>, E> {
        let slot = lock(&self.slots).entry(key.clone()).or_default().clone();

        let mut loaded = lock(&*slot);
        if let Some(value) = loaded.as_ref() {
            return Ok(value.clone());
        }
        tracing::debug!("Loading page {:?}", key);
        let value = Arc::new(load()?);
        *loaded = Some(value.clone());
        Ok(value)
    }

    pub fn is_loaded(&self, key: &K) -> bool {
        let Some(slot) = lock(&self.slots).get(key).cloned() else {
            return false;
        };
        let loaded = lock(&*slot).is_some();
        loaded
    }
}

impl<K: Eq + Hash + Clone + std::fmt::Debug, V> Default for PageCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
