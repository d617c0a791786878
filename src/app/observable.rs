use std::sync::{Arc, Mutex, MutexGuard};

struct Slot<T> {
    version: u64,
    value: Arc<T>,
}

/// Single-slot value cell. Readers only ever see the latest published value.
pub struct Observable<T> {
    slot: Arc<Mutex<Slot<T>>>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot {
                version: 0,
                value: Arc::new(value),
            })),
        }
    }

    pub fn get(&self) -> Arc<T> {
        Arc::clone(&lock(&self.slot).value)
    }

    /// Derives the next value from the current one while holding the lock.
    pub fn update(&self, next: impl FnOnce(&T) -> T) {
        let mut slot = lock(&self.slot);
        slot.value = Arc::new(next(&slot.value));
        slot.version += 1;
    }

    /// Like `update`, but the closure may decline by returning `None`.
    /// Returns whether a new value was published.
    pub fn try_update(&self, next: impl FnOnce(&T) -> Option<T>) -> bool {
        let mut slot = lock(&self.slot);
        let Some(value) = next(&slot.value) else {
            return false;
        };
        slot.value = Arc::new(value);
        slot.version += 1;
        true
    }

    pub fn subscribe(&self) -> Subscriber<T> {
        Subscriber {
            slot: Arc::clone(&self.slot),
            seen: None,
        }
    }
}

pub struct Subscriber<T> {
    slot: Arc<Mutex<Slot<T>>>,
    seen: Option<u64>,
}

impl<T> Subscriber<T> {
    /// Returns the latest value if it was published after the last call.
    /// The first call always yields the current value.
    pub fn changed(&mut self) -> Option<Arc<T>> {
        let slot = lock(&self.slot);
        if self.seen == Some(slot.version) {
            return None;
        }
        self.seen = Some(slot.version);
        Some(Arc::clone(&slot.value))
    }
}

// A panic while holding the lock can only happen inside `update`'s closure,
// which leaves the previous value in place.
fn lock<T>(slot: &Mutex<Slot<T>>) -> MutexGuard<'_, Slot<T>> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
