//! Card configuration editor.
//!
//! The editor binds a single text field to `run_id` and offers a helper
//! list of runs discovered from the snapshot. It owns a local copy of the
//! configuration for the duration of an edit session and notifies the host
//! through a [`ConfigSink`] after every edit; persistence stays on the
//! host's side.

use crate::config::CardConfig;
use crate::entity::Snapshot;

const STATUS_ENTITY_PREFIX: &str = "sensor.plantrun_status_";

/// A run inferred from the snapshot, with a best-effort display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredRun {
    pub id: String,
    pub name: String,
}

/// Sink for configuration-changed notifications, provided by the host.
pub trait ConfigSink {
    fn config_changed(&mut self, config: &CardConfig);
}

impl<F: FnMut(&CardConfig)> ConfigSink for F {
    fn config_changed(&mut self, config: &CardConfig) {
        self(config)
    }
}

/// List the distinct runs present in the snapshot, inferred from status
/// sensor identifiers. Purely read-only; no matches yields an empty list.
pub fn discover_runs(snapshot: &Snapshot) -> Vec<DiscoveredRun> {
    let mut runs: Vec<DiscoveredRun> = Vec::new();
    for entity in snapshot.iter() {
        if let Some(id) = entity.entity_id.strip_prefix(STATUS_ENTITY_PREFIX) {
            if runs.iter().any(|run| run.id == id) {
                continue;
            }
            runs.push(DiscoveredRun {
                id: id.to_string(),
                name: entity
                    .attributes
                    .friendly_name
                    .clone()
                    .unwrap_or_else(|| entity.entity_id.clone()),
            });
        }
    }
    runs
}

/// Edit session over a local copy of the card configuration.
#[derive(Debug, Clone, Default)]
pub struct CardEditor {
    config: CardConfig,
}

impl CardEditor {
    pub fn new(config: CardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Apply an edit of the bound `run_id` field.
    ///
    /// An empty value deletes the key instead of storing `""`, keeping the
    /// persisted configuration minimal. Each call notifies the sink exactly
    /// once with the updated configuration.
    pub fn set_run_id(&mut self, value: &str, sink: &mut dyn ConfigSink) {
        if value.is_empty() {
            self.config.run_id = None;
        } else {
            self.config.run_id = Some(value.to_string());
        }
        sink.config_changed(&self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Attributes, EntityState};

    #[derive(Default)]
    struct RecordingSink {
        events: Vec<CardConfig>,
    }

    impl ConfigSink for RecordingSink {
        fn config_changed(&mut self, config: &CardConfig) {
            self.events.push(config.clone());
        }
    }

    fn status(run_id: &str, name: Option<&str>) -> EntityState {
        EntityState::new(format!("sensor.plantrun_status_{run_id}"), "active").with_attributes(
            Attributes {
                friendly_name: name.map(String::from),
                ..Attributes::default()
            },
        )
    }

    #[test]
    fn test_discover_runs_from_status_sensors() {
        let snapshot: Snapshot = [
            status("run1", Some("Tent A Status")),
            EntityState::new("sensor.plantrun_temp_run1", "24"),
            status("run2", None),
            EntityState::new("sensor.other_status_x", "on"),
        ]
        .into_iter()
        .collect();

        let runs = discover_runs(&snapshot);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].id, "run1");
        assert_eq!(runs[0].name, "Tent A Status");
        assert_eq!(runs[1].id, "run2");
        assert_eq!(runs[1].name, "sensor.plantrun_status_run2");
    }

    #[test]
    fn test_discover_runs_empty_snapshot() {
        assert!(discover_runs(&Snapshot::new()).is_empty());
    }

    #[test]
    fn test_set_run_id_emits_one_event() {
        let mut editor = CardEditor::default();
        let mut sink = RecordingSink::default();

        editor.set_run_id("run1", &mut sink);
        assert_eq!(sink.events.len(), 1);
        assert_eq!(sink.events[0].run_id.as_deref(), Some("run1"));
        assert_eq!(editor.config().run_id.as_deref(), Some("run1"));
    }

    #[test]
    fn test_set_run_id_overwrite() {
        let mut editor = CardEditor::new(CardConfig::new("run1"));
        let mut sink = RecordingSink::default();

        editor.set_run_id("run2", &mut sink);
        assert_eq!(sink.events.len(), 1);
        assert_eq!(editor.config().run_id.as_deref(), Some("run2"));
    }

    #[test]
    fn test_empty_edit_deletes_key() {
        let mut editor = CardEditor::new(CardConfig::new("run1"));
        let mut sink = RecordingSink::default();

        editor.set_run_id("", &mut sink);
        assert_eq!(sink.events.len(), 1);
        assert_eq!(editor.config().run_id, None);
        // The deleted key disappears from the serialized form too.
        assert_eq!(serde_json::to_string(editor.config()).unwrap(), "{}");
    }

    #[test]
    fn test_closure_sink() {
        let mut editor = CardEditor::default();
        let mut count = 0;
        let mut sink = |_: &CardConfig| count += 1;
        editor.set_run_id("run1", &mut sink);
        editor.set_run_id("run1", &mut sink);
        assert_eq!(count, 2);
    }
}
