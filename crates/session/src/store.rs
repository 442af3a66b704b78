//! Single-slot store for the active wallet session.

use crate::Session;
use alloy_primitives::Address;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Holds at most one active session.
///
/// Written by the session manager on connect/disconnect and read by
/// the transfer flow. A second connect replaces the slot: last writer
/// wins. Cheap to clone; clones share the slot.
#[derive(Clone, Default)]
pub struct SessionStore {
    slot: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a session, replacing any previous one.
    pub fn set(&self, session: Session) {
        debug!(address = %session.address, "Session slot updated");
        *self
            .slot
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    /// Snapshot of the current session, if any.
    pub fn get(&self) -> Option<Session> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clear the slot (explicit disconnect).
    pub fn clear(&self) {
        debug!("Session slot cleared");
        *self
            .slot
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Whether a session is currently established.
    pub fn is_connected(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Address of the active session, if connected.
    pub fn address(&self) -> Option<Address> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.address)
    }
}
