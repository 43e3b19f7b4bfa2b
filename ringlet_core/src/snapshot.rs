// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State snapshots.
//!
//! The host dashboard delivers a full snapshot of entity states on every update
//! tick. The engine treats it as immutable per render pass and keeps no
//! incremental state of its own.

extern crate alloc;

use alloc::string::String;

use hashbrown::HashMap;

/// The attribute key conventionally carrying a source's display unit.
pub const UNIT_ATTRIBUTE: &str = "unit_of_measurement";

/// One entity's state: a raw state string plus an attribute bag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityState {
    /// The raw state value (free-form; see [`crate::coerce`]).
    pub state: String,
    /// String attributes, e.g. [`UNIT_ATTRIBUTE`].
    pub attributes: HashMap<String, String>,
}

impl EntityState {
    /// Creates a state with an empty attribute bag.
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            attributes: HashMap::new(),
        }
    }

    /// Adds an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The unit attribute, if present.
    pub fn unit(&self) -> Option<&str> {
        self.attributes.get(UNIT_ATTRIBUTE).map(String::as_str)
    }
}

/// A mapping from entity identifier to [`EntityState`], immutable per render pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateSnapshot {
    entities: HashMap<String, EntityState>,
}

impl StateSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entity state, replacing any previous state for the identifier.
    pub fn insert(&mut self, id: impl Into<String>, state: EntityState) {
        self.entities.insert(id.into(), state);
    }

    /// Looks up an entity by identifier.
    pub fn get(&self, id: &str) -> Option<&EntityState> {
        self.entities.get(id)
    }

    /// Number of entities in the snapshot.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the snapshot has no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns whether any of `sources` has a different state string than in `previous`.
    ///
    /// A recompute-avoidance hook for hosts: rendering is cheap but not free, and most
    /// snapshot ticks leave the referenced sources untouched. This is an optional layer
    /// outside [`crate::DonutChart::render`]; skipping a render is never required for
    /// correctness.
    pub fn sources_changed<'a>(
        &self,
        previous: &Self,
        sources: impl IntoIterator<Item = &'a str>,
    ) -> bool {
        sources.into_iter().any(|id| {
            let old = previous.get(id).map(|e| e.state.as_str());
            let new = self.get(id).map(|e| e.state.as_str());
            old != new
        })
    }
}
