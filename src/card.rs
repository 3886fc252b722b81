//! View assembly and render state machine for the PlantRun card.
//!
//! `render` is a pure function of (config, snapshot): the host calls it
//! whenever either input changes, and the result is rebuilt from scratch
//! every time. There is no stored state machine and no caching; the render
//! state is whatever the current inputs say it is.
//!
//! States:
//! - `NoConfig`: no run id configured, nothing to show.
//! - `MissingStatus`: the run's status sensor is absent; renders an inline
//!   error panel with no action affordances.
//! - `Idle`: status sensor present but not `"active"`; metrics and details
//!   render, the action row does not.
//! - `Running`: status is exactly `"active"`; everything renders, including
//!   the three action buttons.

use crate::classify::{classify, ColorClass};
use crate::config::CardConfig;
use crate::entity::{belongs_to_run, core_entity_id, is_core_entity, EntityState, Snapshot};

/// Title shown when the status sensor carries no friendly name.
pub const DEFAULT_TITLE: &str = "GrowZelt Steuerung";

/// Status value that puts the card into the running state. Exact match;
/// "idle", "ended" or anything else renders without the action row.
pub const STATUS_ACTIVE: &str = "active";

/// One metric chip derived from a proxy sensor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricChip {
    pub entity_id: String,
    pub icon: String,
    pub color_class: ColorClass,
    pub label: String,
    pub value: String,
    pub unit: Option<String>,
}

impl MetricChip {
    /// Value with its unit appended, e.g. `24 °C`.
    pub fn display_value(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} {}", self.value, unit),
            None => self.value.clone(),
        }
    }
}

/// One row in the details list (name on the left, value on the right).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub name: String,
    pub name_icon: String,
    pub value: String,
    pub value_icon: String,
}

/// Action affordances shown while a run is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ChangePhase,
    AddNote,
    EndRun,
}

/// A rendered action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub action: Action,
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub destructive: bool,
}

/// The populated card view, common to the idle and running states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub run_id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub chips: Vec<MetricChip>,
    pub details: Vec<DetailRow>,
    pub actions: Vec<ActionButton>,
}

/// Result of one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    NoConfig,
    MissingStatus { run_id: String },
    Idle(CardView),
    Running(CardView),
}

impl RenderState {
    /// The populated view, if this state carries one.
    pub fn view(&self) -> Option<&CardView> {
        match self {
            RenderState::Idle(view) | RenderState::Running(view) => Some(view),
            _ => None,
        }
    }

    pub fn actions_visible(&self) -> bool {
        matches!(self, RenderState::Running(_))
    }

    /// Message for the inline error panel, if this state renders one.
    pub fn error_message(&self) -> Option<String> {
        match self {
            RenderState::MissingStatus { run_id } => Some(format!(
                "Run ID \"{run_id}\" not found or sensors not yet initialized."
            )),
            _ => None,
        }
    }
}

/// Derive the card's render state from the current config and snapshot.
pub fn render(config: &CardConfig, snapshot: &Snapshot) -> RenderState {
    let run_id = match config.run_id.as_deref() {
        Some(run_id) if !run_id.is_empty() => run_id,
        _ => return RenderState::NoConfig,
    };

    let status = match snapshot.get(&core_entity_id("status", run_id)) {
        Some(status) => status,
        None => {
            return RenderState::MissingStatus {
                run_id: run_id.to_string(),
            }
        }
    };
    let phase = snapshot.get(&core_entity_id("active_phase", run_id));
    let cultivar = snapshot.get(&core_entity_id("cultivar", run_id));

    let running = status.state == STATUS_ACTIVE;

    let view = CardView {
        run_id: run_id.to_string(),
        title: title_for(status),
        subtitle: cultivar.map(subtitle_for),
        chips: metric_chips(snapshot, run_id),
        details: detail_rows(phase, status, running),
        actions: if running { action_buttons() } else { Vec::new() },
    };

    if running {
        RenderState::Running(view)
    } else {
        RenderState::Idle(view)
    }
}

fn title_for(status: &EntityState) -> String {
    match &status.attributes.friendly_name {
        Some(name) => name.replacen(" Status", "", 1),
        None => DEFAULT_TITLE.to_string(),
    }
}

fn subtitle_for(cultivar: &EntityState) -> String {
    match &cultivar.attributes.breeder {
        Some(breeder) => format!("{} ({})", cultivar.state, breeder),
        None => cultivar.state.clone(),
    }
}

/// Collect and classify the run's proxy metrics, in snapshot order.
fn metric_chips(snapshot: &Snapshot, run_id: &str) -> Vec<MetricChip> {
    snapshot
        .iter()
        .filter(|entity| belongs_to_run(&entity.entity_id, run_id))
        .filter(|entity| !is_core_entity(&entity.entity_id))
        .map(|entity| {
            let classification = classify(entity);
            let label = entity
                .attributes
                .friendly_name
                .as_ref()
                .map(|name| name.replacen(&format!("_{run_id}"), "", 1))
                .unwrap_or_else(|| "Metric".to_string());
            MetricChip {
                entity_id: entity.entity_id.clone(),
                icon: classification.icon,
                color_class: classification.color_class,
                label,
                value: entity.state.clone(),
                unit: entity.attributes.unit_of_measurement.clone(),
            }
        })
        .collect()
}

fn detail_rows(phase: Option<&EntityState>, status: &EntityState, running: bool) -> Vec<DetailRow> {
    vec![
        DetailRow {
            name: "Current Phase".to_string(),
            name_icon: "mdi:cannabis".to_string(),
            value: phase.map_or_else(|| "N/A".to_string(), |p| p.state.clone()),
            value_icon: "mdi:sprout".to_string(),
        },
        DetailRow {
            name: "Run Status".to_string(),
            name_icon: "mdi:cannabis".to_string(),
            value: status.state.clone(),
            value_icon: if running {
                "mdi:play-circle".to_string()
            } else {
                "mdi:stop-circle".to_string()
            },
        },
    ]
}

fn action_buttons() -> Vec<ActionButton> {
    vec![
        ActionButton {
            action: Action::ChangePhase,
            icon: "mdi:update".to_string(),
            title: "Change Phase".to_string(),
            subtitle: "Enter next stage".to_string(),
            destructive: false,
        },
        ActionButton {
            action: Action::AddNote,
            icon: "mdi:notebook-edit".to_string(),
            title: "Add Note".to_string(),
            subtitle: "Log an event".to_string(),
            destructive: false,
        },
        ActionButton {
            action: Action::EndRun,
            icon: "mdi:power".to_string(),
            title: "End Run".to_string(),
            subtitle: "Lock timeline".to_string(),
            destructive: true,
        },
    ]
}
