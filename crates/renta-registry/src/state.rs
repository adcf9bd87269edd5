//! # Registry State
//!
//! Shared-ownership wrapper for embedding the registry in a UI shell.
//!
//! ## Thread Safety
//! The registry is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple UI handlers may access/modify the store
//! 2. Only one handler should mutate it at a time
//! 3. Shell frameworks may run handlers on different threads
//!
//! The business model is still single-writer: there is exactly one logical
//! actor (the current session), so the lock is never contended in practice.
//!
//! ## Why Not RwLock?
//! Registry actions are quick, and most handlers mutate state. A RwLock
//! would add complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use crate::registry::Registry;

/// Shell-managed registry state.
#[derive(Debug, Clone, Default)]
pub struct RegistryState {
    registry: Arc<Mutex<Registry>>,
}

impl RegistryState {
    /// Wraps a registry (usually the seeded one) for shared access.
    pub fn new(registry: Registry) -> Self {
        RegistryState {
            registry: Arc::new(Mutex::new(registry)),
        }
    }

    /// Executes a function with read access to the registry.
    ///
    /// ## Usage
    /// ```rust
    /// use renta_registry::{seed_registry, RegistryState};
    ///
    /// let state = RegistryState::new(seed_registry());
    /// let fleet_size = state.with_registry(|r| r.vehicles().len());
    /// assert_eq!(fleet_size, 6);
    /// ```
    pub fn with_registry<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Registry) -> R,
    {
        let registry = self.registry.lock().expect("Registry mutex poisoned");
        f(&registry)
    }

    /// Executes a function with write access to the registry.
    pub fn with_registry_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Registry) -> R,
    {
        let mut registry = self.registry.lock().expect("Registry mutex poisoned");
        f(&mut registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use renta_core::types::VehicleStatus;

    #[test]
    fn test_shared_state_sees_mutations() {
        let state = RegistryState::new(crate::seed::seed_registry());
        let handle = state.clone();

        let first_id =
            state.with_registry(|r| r.vehicles()[0].id.clone());
        handle.with_registry_mut(|r| r.set_maintenance(&first_id));

        let status = state.with_registry(|r| r.find_vehicle(&first_id).unwrap().status);
        assert_eq!(status, VehicleStatus::Maintenance);
    }
}
