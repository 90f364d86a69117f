//! Candidate solutions and their per-solution metadata.

use super::variable::Variable;
use crate::error::{MoeaError, Result};
use std::collections::BTreeMap;

/// Property key for the Pareto front index (1-based).
pub const RANK: &str = "rank";
/// Property key for the NSGA-II crowding distance.
pub const CROWDING_DISTANCE: &str = "crowding_distance";
/// Property key for the SPEA2 strength value.
pub const STRENGTH: &str = "strength";
/// Property key for the SPEA2 raw fitness.
pub const RAW_FITNESS: &str = "raw_fitness";
/// Property key for the SPEA2 density estimate.
pub const DENSITY: &str = "density";
/// Property key for the SPEA2 combined fitness (raw fitness + density).
pub const FITNESS: &str = "fitness";

/// String-keyed numeric metadata attached to a solution.
///
/// Algorithms stash transient values here (rank, crowding distance,
/// strength, ...) and overwrite them every generation. Each algorithm only
/// reads keys it wrote itself.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Properties(BTreeMap<String, f64>);

impl Properties {
    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: &str, value: f64) {
        match self.0.get_mut(key) {
            Some(slot) => *slot = value,
            None => {
                self.0.insert(key.to_owned(), value);
            }
        }
    }

    /// Removes and returns the value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<f64> {
        self.0.remove(key)
    }

    /// Whether a value is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// A candidate solution: decision variables, objective values and metadata.
///
/// The variable and objective vectors have fixed lengths chosen at
/// construction. Objectives start at `0.0` until evaluated and all
/// objectives are **minimized**.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    variables: Vec<Variable>,
    objectives: Vec<f64>,
    properties: Properties,
}

impl Solution {
    /// Creates an unevaluated solution with `number_of_objectives` zeroed
    /// objective slots.
    pub fn new(variables: Vec<Variable>, number_of_objectives: usize) -> Self {
        Self {
            variables,
            objectives: vec![0.0; number_of_objectives],
            properties: Properties::default(),
        }
    }

    /// Creates a solution with no decision variables from an objective
    /// vector. Useful for ranking fronts loaded from files.
    pub fn from_objectives(objectives: Vec<f64>) -> Self {
        Self {
            variables: Vec::new(),
            objectives,
            properties: Properties::default(),
        }
    }

    /// The decision variables.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Mutable access to the decision variables, used by variation operators.
    pub fn variables_mut(&mut self) -> &mut [Variable] {
        &mut self.variables
    }

    /// Number of decision variables.
    pub fn number_of_variables(&self) -> usize {
        self.variables.len()
    }

    /// The objective vector.
    pub fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    /// The value of objective `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn objective(&self, index: usize) -> f64 {
        self.objectives[index]
    }

    /// Number of objectives.
    pub fn number_of_objectives(&self) -> usize {
        self.objectives.len()
    }

    /// Overwrites the objective vector.
    ///
    /// The length must match the length fixed at construction; a shorter
    /// or longer vector is rejected rather than padded.
    pub fn set_objectives(&mut self, values: Vec<f64>) -> Result<()> {
        if values.len() != self.objectives.len() {
            return Err(MoeaError::ObjectiveCountMismatch {
                expected: self.objectives.len(),
                actual: values.len(),
            });
        }
        self.objectives = values;
        Ok(())
    }

    /// The metadata map.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Mutable access to the metadata map.
    pub fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    /// Shorthand for `properties().get(key)`.
    pub fn property(&self, key: &str) -> Option<f64> {
        self.properties.get(key)
    }

    /// Shorthand for `properties_mut().set(key, value)`.
    pub fn set_property(&mut self, key: &str, value: f64) {
        self.properties.set(key, value);
    }

    /// Drops all metadata. Offspring start with an empty map.
    pub fn clear_properties(&mut self) {
        self.properties.clear();
    }

    /// The Pareto front index assigned by the last ranking (1-based).
    pub fn rank(&self) -> Option<usize> {
        self.property(RANK).map(|r| r as usize)
    }

    /// The crowding distance assigned by the last NSGA-II pass.
    pub fn crowding_distance(&self) -> Option<f64> {
        self.property(CROWDING_DISTANCE)
    }

    /// The SPEA2 fitness assigned by the last fitness pass.
    pub fn fitness(&self) -> Option<f64> {
        self.property(FITNESS)
    }

    /// Whether `other` has equal variables and equal objectives.
    ///
    /// Metadata is ignored.
    pub fn is_duplicate_of(&self, other: &Solution) -> bool {
        self.variables == other.variables && self.objectives == other.objectives
    }
}
