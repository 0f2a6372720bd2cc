//! Process-wide connection registry.
//!
//! # Responsibilities
//! - Hold one global slot per concrete source type
//! - Hand out the same slot to every global establisher of that type
//! - Provide explicit teardown for test isolation
//!
//! # Design Decisions
//! - Keyed by the source's `TypeId`, so two source types never share a handle
//! - Slots are never removed; resets empty them in place so establishers
//!   holding a slot keep their gate

use std::any::{Any, TypeId};
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

use crate::establish::Source;
use crate::scope::slot::Slot;

/// Type-erased view of a `Slot<C>`.
trait AnySlot: Send + Sync {
    fn reset(&self);
    fn occupied(&self) -> bool;
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<C: Send + Sync + 'static> AnySlot for Slot<C> {
    fn reset(&self) {
        self.clear();
    }

    fn occupied(&self) -> bool {
        self.is_set()
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

static SLOTS: OnceLock<DashMap<TypeId, Arc<dyn AnySlot>>> = OnceLock::new();

fn slots() -> &'static DashMap<TypeId, Arc<dyn AnySlot>> {
    SLOTS.get_or_init(DashMap::new)
}

/// The global slot for source type `S`, created empty on first use.
pub fn slot<S: Source>() -> Arc<Slot<S::Connection>> {
    let erased = slots()
        .entry(TypeId::of::<S>())
        .or_insert_with(|| {
            let fresh: Arc<dyn AnySlot> = Arc::new(Slot::<S::Connection>::new());
            fresh
        })
        .clone();

    match erased.into_any().downcast::<Slot<S::Connection>>() {
        Ok(slot) => slot,
        Err(_) => unreachable!(
            "global slot for {} holds a foreign connection type",
            std::any::type_name::<S>()
        ),
    }
}

/// The globally established connection for `S`, if any.
pub fn connection<S: Source>() -> Option<Arc<S::Connection>> {
    slot::<S>().get()
}

/// Store a connection in the global slot for `S`.
pub fn set_connection<S: Source>(connection: Arc<S::Connection>) {
    slot::<S>().set(connection);
}

pub fn is_established<S: Source>() -> bool {
    slots()
        .get(&TypeId::of::<S>())
        .is_some_and(|slot| slot.occupied())
}

/// Empty the global slot for `S`, returning the handle it held.
pub fn clear<S: Source>() -> Option<Arc<S::Connection>> {
    slot::<S>().clear()
}

/// Empty every global slot.
pub fn clear_all() {
    for entry in slots().iter() {
        entry.value().reset();
    }
}
