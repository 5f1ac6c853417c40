//! Named intrusion parameter sets.
//!
//! [`Registry`] maps an intrusion id to its validated [`ParameterSet`],
//! keeping insertion order for display. Entries are never edited in place:
//! [`Registry::put`] replaces a whole set and [`Registry::remove`] drops one.
//!
//! ```
//! use geotherm::registry::{Registry, RegistryError};
//!
//! let mut registry = Registry::bundled()?;
//! assert_eq!(registry.list()[0], "Barcelona");
//!
//! let barcelona = registry.get("Barcelona")?.clone();
//! assert_eq!(barcelona.initial_temperature, 716.0);
//!
//! registry.remove("Barcelona")?;
//! assert!(matches!(
//!     registry.get("Barcelona"),
//!     Err(RegistryError::NotFound { .. })
//! ));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod dataset;
mod error;
mod geometry;
mod parameter_set;
mod shared;

pub use error::{DatasetError, RegistryError, ValidationError};
pub use geometry::{Geometry, UnknownGeometry};
pub use parameter_set::{ParameterSet, parse_time_grid, validate_time_grid};
pub use shared::SharedRegistry;

#[cfg(test)]
pub(crate) use parameter_set::fixtures;

use std::path::Path;

use log::debug;

/// Insertion-ordered collection of validated parameter sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    entries: Vec<ParameterSet>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the reference intrusions shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] if the bundled data fails to decode or
    /// validate.
    pub fn bundled() -> Result<Self, DatasetError> {
        let registry = Self::from_sets(dataset::parse(dataset::BUNDLED)?);
        debug!("loaded {} bundled intrusions", registry.len());
        Ok(registry)
    }

    /// Loads a registry from a JSON dataset.
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] if the document or any entry is malformed,
    /// inconsistent, or invalid.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let registry = Self::from_sets(dataset::parse(json)?);
        debug!("loaded {} intrusions from JSON", registry.len());
        Ok(registry)
    }

    /// Loads a registry from a JSON dataset file.
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] if the file cannot be read or its
    /// contents are rejected as in [`Registry::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let registry = Self::from_sets(dataset::read(path)?);
        debug!(
            "loaded {} intrusions from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Writes the registry in the dataset format, in registry order.
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, DatasetError> {
        dataset::render(&self.entries)
    }

    /// Saves the registry to a dataset file, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`] if the file cannot be written.
    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<(), DatasetError> {
        let path = path.as_ref();
        dataset::write(path, &self.entries)?;
        debug!("saved {} intrusions to {}", self.len(), path.display());
        Ok(())
    }

    /// Builds a registry from sets that have already been validated.
    /// Later duplicates replace earlier ones in place.
    fn from_sets(sets: Vec<ParameterSet>) -> Self {
        let mut registry = Self::new();
        for set in sets {
            registry.insert(set);
        }
        registry
    }

    /// Returns the parameter set registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no such entry exists.
    pub fn get(&self, id: &str) -> Result<&ParameterSet, RegistryError> {
        self.position(id)
            .map(|index| &self.entries[index])
            .ok_or_else(|| RegistryError::NotFound { id: id.to_owned() })
    }

    /// Validates `set` and stores it under its own id.
    ///
    /// An existing entry with the same id is replaced and keeps its place
    /// in the listing order. On error the registry is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if the set is malformed.
    pub fn put(&mut self, set: ParameterSet) -> Result<(), RegistryError> {
        set.validate()?;
        self.insert(set);
        Ok(())
    }

    /// Returns the registered ids in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<&str> {
        self.entries.iter().map(|set| set.id.as_str()).collect()
    }

    /// Removes and returns the entry registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no such entry exists.
    pub fn remove(&mut self, id: &str) -> Result<ParameterSet, RegistryError> {
        let index = self
            .position(id)
            .ok_or_else(|| RegistryError::NotFound { id: id.to_owned() })?;
        debug!("removed intrusion `{id}`");
        Ok(self.entries.remove(index))
    }

    /// Returns `true` if an entry is registered under `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ParameterSet> {
        self.entries.iter()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|set| set.id == id)
    }

    fn insert(&mut self, set: ParameterSet) {
        match self.position(&set.id) {
            Some(index) => {
                debug!("replaced intrusion `{}`", set.id);
                self.entries[index] = set;
            }
            None => {
                debug!("registered intrusion `{}`", set.id);
                self.entries.push(set);
            }
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a ParameterSet;
    type IntoIter = std::slice::Iter<'a, ParameterSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
