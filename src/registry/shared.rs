use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::warn;

use super::{ParameterSet, Registry, RegistryError};

/// A cloneable handle to one [`Registry`] shared between sessions.
///
/// Reads run concurrently and writes are exclusive. Every write replaces or
/// removes whole entries, so a lock poisoned by a panicking writer still
/// guards a consistent registry and is recovered rather than propagated.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl SharedRegistry {
    /// Wraps an existing registry.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Returns a copy of the entry registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no such entry exists.
    pub fn get(&self, id: &str) -> Result<ParameterSet, RegistryError> {
        self.read().get(id).cloned()
    }

    /// See [`Registry::put`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if the set is malformed.
    pub fn put(&self, set: ParameterSet) -> Result<(), RegistryError> {
        self.write().put(set)
    }

    /// Registered ids in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        self.read().list().into_iter().map(str::to_owned).collect()
    }

    /// See [`Registry::remove`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no such entry exists.
    pub fn remove(&self, id: &str) -> Result<ParameterSet, RegistryError> {
        self.write().remove(id)
    }

    /// Returns a copy of the whole registry.
    #[must_use]
    pub fn snapshot(&self) -> Registry {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.inner.read().unwrap_or_else(|poisoned| {
            warn!("recovering registry from a poisoned lock");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.inner.write().unwrap_or_else(|poisoned| {
            warn!("recovering registry from a poisoned lock");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl From<Registry> for SharedRegistry {
    fn from(registry: Registry) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    use crate::registry::{Geometry, fixtures::with_geometry};

    #[test]
    fn handles_see_each_others_writes() {
        let shared = SharedRegistry::default();
        let other = shared.clone();

        shared.put(with_geometry(Geometry::Plane)).unwrap();
        assert_eq!(other.list(), ["Barcelona Plane"]);

        let removed = other.remove("Barcelona Plane").unwrap();
        assert_eq!(removed.geometry, Geometry::Plane);
        assert!(matches!(
            shared.get("Barcelona Plane"),
            Err(RegistryError::NotFound { .. })
        ));
    }

    #[test]
    fn concurrent_writers_all_land() {
        let shared = SharedRegistry::new(Registry::new());

        thread::scope(|scope| {
            for geometry in Geometry::ALL {
                let handle = shared.clone();
                scope.spawn(move || handle.put(with_geometry(geometry)).unwrap());
            }
        });

        let mut ids = shared.list();
        ids.sort();
        assert_eq!(
            ids,
            ["Barcelona Cylinder", "Barcelona Plane", "Barcelona Sphere"]
        );
    }

    #[test]
    fn survives_a_poisoned_lock() {
        let shared = SharedRegistry::from(Registry::bundled().unwrap());

        let handle = shared.clone();
        let outcome = thread::spawn(move || {
            let _guard = handle.write();
            panic!("writer died");
        })
        .join();
        assert!(outcome.is_err());

        assert_eq!(shared.snapshot().len(), 3);
        assert!(shared.get("Barcelona").is_ok());
    }
}
