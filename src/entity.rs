//! Host state snapshot model.
//!
//! The host owns every entity; this crate only ever reads a snapshot of the
//! state table on each render pass. `Snapshot` preserves the host's iteration
//! order, which is what determines the order of metric chips on the card.

use serde::{Deserialize, Serialize};

/// Prefix shared by every PlantRun sensor entity.
pub const ENTITY_PREFIX: &str = "sensor.plantrun_";

/// The three core fields resolved for every run, in addition to the dynamic
/// proxy metrics.
pub const CORE_FIELDS: [&str; 3] = ["status", "active_phase", "cultivar"];

/// Attributes attached to an entity by the host. All optional; unknown keys
/// in the host's attribute map are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_of_measurement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breeder: Option<String>,
}

/// A single entity's current state, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityState {
    pub entity_id: String,
    pub state: String,
    #[serde(default)]
    pub attributes: Attributes,
}

impl EntityState {
    pub fn new(entity_id: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            state: state.into(),
            attributes: Attributes::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Read-only snapshot of the host state table.
///
/// Backed by a `Vec` so that iteration order is exactly insertion order;
/// inserting an id that already exists replaces it in place rather than
/// moving it to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entities: Vec<EntityState>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity: EntityState) {
        if let Some(existing) = self
            .entities
            .iter_mut()
            .find(|e| e.entity_id == entity.entity_id)
        {
            *existing = entity;
        } else {
            self.entities.push(entity);
        }
    }

    pub fn get(&self, entity_id: &str) -> Option<&EntityState> {
        self.entities.iter().find(|e| e.entity_id == entity_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityState> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl FromIterator<EntityState> for Snapshot {
    fn from_iter<I: IntoIterator<Item = EntityState>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for entity in iter {
            snapshot.insert(entity);
        }
        snapshot
    }
}

/// Build the entity id for one of a run's core sensors, e.g.
/// `sensor.plantrun_status_tent1`.
pub fn core_entity_id(field: &str, run_id: &str) -> String {
    format!("{ENTITY_PREFIX}{field}_{run_id}")
}

/// True if `entity_id` belongs to the given run's sensor family: it carries
/// the PlantRun prefix and ends with `_<run_id>`.
pub fn belongs_to_run(entity_id: &str, run_id: &str) -> bool {
    entity_id.starts_with(ENTITY_PREFIX) && entity_id.ends_with(&format!("_{run_id}"))
}

/// True if `entity_id` mentions one of the core fields. Containment rather
/// than exact field equality: `sensor.plantrun_water_status_x` is also
/// treated as core and excluded from the proxy metric set.
pub fn is_core_entity(entity_id: &str) -> bool {
    CORE_FIELDS.iter().any(|field| entity_id.contains(field))
}
