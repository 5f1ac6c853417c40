//! JSON dataset format.
//!
//! A dataset is an object keyed by intrusion name. Each entry carries the
//! geometry and size at the top level and the full parameter set under
//! `parameters`; the top-level copies, and an optional top-level `time`,
//! must agree with the nested values.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{DatasetError, Geometry, ParameterSet};

/// Reference intrusions shipped with the crate.
pub(super) const BUNDLED: &str = include_str!("../../data/intrusions.json");

#[derive(Debug, Serialize, Deserialize)]
struct Entry {
    geometry: Geometry,
    d: f64,
    parameters: EntryParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<Vec<f64>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct EntryParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    geometry: Option<Geometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    d: Option<f64>,
    #[serde(rename = "T0")]
    initial_temperature: f64,
    #[serde(rename = "K1")]
    magma_conductivity: f64,
    #[serde(rename = "k")]
    rock_diffusivity: f64,
    #[serde(rename = "K")]
    rock_conductivity: f64,
    #[serde(rename = "k1")]
    magma_diffusivity: f64,
    #[serde(rename = "g")]
    gradient: f64,
    #[serde(rename = "l")]
    depth: f64,
    time: Vec<f64>,
}

impl Entry {
    fn into_parameter_set(self, id: &str) -> Result<ParameterSet, DatasetError> {
        let conflict = |field| DatasetError::Conflict {
            id: id.to_owned(),
            field,
        };

        let p = self.parameters;
        if p.id.as_deref().is_some_and(|nested| nested != id) {
            return Err(conflict("id"));
        }
        if p.geometry.is_some_and(|nested| nested != self.geometry) {
            return Err(conflict("geometry"));
        }
        if p.d.is_some_and(|nested| nested != self.d) {
            return Err(conflict("d"));
        }
        if self.time.as_ref().is_some_and(|outer| *outer != p.time) {
            return Err(conflict("time"));
        }

        Ok(ParameterSet {
            id: id.to_owned(),
            geometry: self.geometry,
            initial_temperature: p.initial_temperature,
            magma_conductivity: p.magma_conductivity,
            rock_diffusivity: p.rock_diffusivity,
            rock_conductivity: p.rock_conductivity,
            magma_diffusivity: p.magma_diffusivity,
            gradient: p.gradient,
            depth: p.depth,
            size: self.d,
            time: p.time,
        })
    }

    fn from_parameter_set(set: &ParameterSet) -> Self {
        Self {
            geometry: set.geometry,
            d: set.size,
            parameters: EntryParameters {
                id: Some(set.id.clone()),
                geometry: Some(set.geometry),
                d: Some(set.size),
                initial_temperature: set.initial_temperature,
                magma_conductivity: set.magma_conductivity,
                rock_diffusivity: set.rock_diffusivity,
                rock_conductivity: set.rock_conductivity,
                magma_diffusivity: set.magma_diffusivity,
                gradient: set.gradient,
                depth: set.depth,
                time: set.time.clone(),
            },
            time: Some(set.time.clone()),
        }
    }
}

/// Decodes and validates every entry, in document order.
pub(super) fn parse(json: &str) -> Result<Vec<ParameterSet>, DatasetError> {
    let document: Map<String, Value> = serde_json::from_str(json)?;
    document
        .into_iter()
        .map(|(id, value)| {
            let entry: Entry = serde_json::from_value(value).map_err(|source| {
                DatasetError::Entry {
                    id: id.clone(),
                    source,
                }
            })?;
            let set = entry.into_parameter_set(&id)?;
            set.validate()
                .map_err(|source| DatasetError::Invalid { id, source })?;
            Ok(set)
        })
        .collect()
}

/// Reads a dataset from disk.
pub(super) fn read(path: &Path) -> Result<Vec<ParameterSet>, DatasetError> {
    let json = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_owned(),
        source,
    })?;
    parse(&json)
}

pub(super) fn write<'a>(
    path: &Path,
    sets: impl IntoIterator<Item = &'a ParameterSet>,
) -> Result<(), DatasetError> {
    fs::write(path, render(sets)?).map_err(|source| DatasetError::Io {
        path: path.to_owned(),
        source,
    })
}

/// Encodes entries in the dataset format, preserving their order.
pub(super) fn render<'a>(
    sets: impl IntoIterator<Item = &'a ParameterSet>,
) -> Result<String, DatasetError> {
    let mut document = Map::new();
    for set in sets {
        document.insert(
            set.id.clone(),
            serde_json::to_value(Entry::from_parameter_set(set))?,
        );
    }
    Ok(serde_json::to_string_pretty(&Value::Object(document))?)
}
