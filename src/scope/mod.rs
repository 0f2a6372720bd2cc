//! Connection scoping.
//!
//! # Data Flow
//! ```text
//! Establisher::new(source, policy)
//!     → policy.global ? registry.rs (process-wide slot for the source type)
//!                     : slot.rs (private slot owned by the establisher)
//!     → Scope captured once; every get/set goes through Scope::slot()
//! ```
//!
//! # Design Decisions
//! - The retry loop never branches on scope; only `Scope::slot` does
//! - Global slots live for the whole process and are only emptied explicitly

pub mod registry;
pub mod slot;

use std::sync::Arc;

pub use slot::Slot;

/// Where an establisher keeps its connection.
pub enum Scope<C> {
    /// Shared with every global establisher of the same source type.
    Global(Arc<Slot<C>>),
    /// Owned by a single establisher.
    Local(Slot<C>),
}

impl<C> Scope<C> {
    pub fn slot(&self) -> &Slot<C> {
        match self {
            Scope::Global(slot) => slot,
            Scope::Local(slot) => slot,
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Scope::Global(_))
    }

    /// Label used in logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Scope::Global(_) => "global",
            Scope::Local(_) => "local",
        }
    }
}
