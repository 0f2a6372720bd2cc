//! Single-handle connection slot.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tokio::sync::{Mutex, MutexGuard};

/// Holds at most one connection handle.
///
/// Reads are lock-free. Establishment is serialized through [`Slot::lock`],
/// so whoever holds the gate is the only writer racing to fill the slot.
pub struct Slot<C> {
    value: ArcSwapOption<C>,
    gate: Mutex<()>,
}

impl<C> Slot<C> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            value: ArcSwapOption::new(None),
            gate: Mutex::new(()),
        }
    }

    /// Current handle, if any.
    pub fn get(&self) -> Option<Arc<C>> {
        self.value.load_full()
    }

    /// Store a handle, replacing any previous one.
    pub fn set(&self, connection: Arc<C>) {
        self.value.store(Some(connection));
    }

    /// Empty the slot, returning the handle it held.
    pub fn clear(&self) -> Option<Arc<C>> {
        self.value.swap(None)
    }

    pub fn is_set(&self) -> bool {
        self.value.load().is_some()
    }

    /// Wait for exclusive establishment rights on this slot.
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.gate.lock().await
    }
}

impl<C> Default for Slot<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_starts_empty() {
        let slot: Slot<String> = Slot::new();
        assert!(!slot.is_set());
        assert!(slot.get().is_none());
    }

    #[test]
    fn test_set_replaces_and_clear_returns_handle() {
        let slot = Slot::new();
        let first = Arc::new("first".to_string());
        let second = Arc::new("second".to_string());

        slot.set(first.clone());
        assert!(Arc::ptr_eq(&slot.get().unwrap(), &first));

        slot.set(second.clone());
        let cleared = slot.clear().unwrap();
        assert!(Arc::ptr_eq(&cleared, &second));
        assert!(!slot.is_set());
    }

    #[tokio::test]
    async fn test_gate_is_exclusive() {
        let slot: Slot<u8> = Slot::new();
        let guard = slot.lock().await;
        assert!(slot.gate.try_lock().is_err());
        drop(guard);
        assert!(slot.gate.try_lock().is_ok());
    }
}
