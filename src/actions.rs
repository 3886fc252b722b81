//! Action dispatch.
//!
//! Each affordance collects one piece of input through the dialog seam and
//! issues at most one service call. Cancelling the dialog, or entering
//! nothing, issues no command at all.

use crate::card::Action;
use crate::dialog::Dialogs;
use crate::service::{ServiceBus, SERVICE_ADD_NOTE, SERVICE_ADD_PHASE, SERVICE_DOMAIN, SERVICE_END_RUN};
use serde_json::json;

const CHANGE_PHASE_PROMPT: &str =
    "Enter new phase name (e.g., Vegetative, Flowering, Harvest):";
const ADD_NOTE_PROMPT: &str = "Enter your note:";
const END_RUN_CONFIRM: &str =
    "Are you sure you want to end this run? This will lock the current phase timespan.";

/// Dispatch one action for the given run. Returns `true` if a command was
/// issued, `false` if the interaction was cancelled.
pub fn dispatch(
    action: Action,
    run_id: &str,
    dialogs: &mut dyn Dialogs,
    bus: &mut dyn ServiceBus,
) -> bool {
    match action {
        Action::ChangePhase => change_phase(run_id, dialogs, bus),
        Action::AddNote => add_note(run_id, dialogs, bus),
        Action::EndRun => end_run(run_id, dialogs, bus),
    }
}

pub fn change_phase(run_id: &str, dialogs: &mut dyn Dialogs, bus: &mut dyn ServiceBus) -> bool {
    match dialogs.prompt(CHANGE_PHASE_PROMPT) {
        Some(phase_name) if !phase_name.is_empty() => {
            bus.call(
                SERVICE_DOMAIN,
                SERVICE_ADD_PHASE,
                json!({ "run_id": run_id, "phase_name": phase_name }),
            );
            true
        }
        _ => false,
    }
}

pub fn add_note(run_id: &str, dialogs: &mut dyn Dialogs, bus: &mut dyn ServiceBus) -> bool {
    match dialogs.prompt(ADD_NOTE_PROMPT) {
        Some(text) if !text.is_empty() => {
            bus.call(
                SERVICE_DOMAIN,
                SERVICE_ADD_NOTE,
                json!({ "run_id": run_id, "text": text }),
            );
            true
        }
        _ => false,
    }
}

pub fn end_run(run_id: &str, dialogs: &mut dyn Dialogs, bus: &mut dyn ServiceBus) -> bool {
    if dialogs.confirm(END_RUN_CONFIRM) {
        bus.call(SERVICE_DOMAIN, SERVICE_END_RUN, json!({ "run_id": run_id }));
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::ScriptedDialogs;
    use crate::service::RecordingBus;
    use serde_json::json;

    #[test]
    fn test_change_phase_dispatches_on_input() {
        let mut dialogs = ScriptedDialogs::new().with_prompt(Some("Flowering"));
        let mut bus = RecordingBus::new();

        assert!(change_phase("run1", &mut dialogs, &mut bus));
        assert_eq!(bus.calls().len(), 1);
        let call = bus.last().unwrap();
        assert_eq!(call.domain, "plantrun");
        assert_eq!(call.service, "add_phase");
        assert_eq!(
            call.payload,
            json!({ "run_id": "run1", "phase_name": "Flowering" })
        );
    }

    #[test]
    fn test_change_phase_cancel_issues_nothing() {
        let mut dialogs = ScriptedDialogs::new().with_prompt(None);
        let mut bus = RecordingBus::new();

        assert!(!change_phase("run1", &mut dialogs, &mut bus));
        assert!(bus.calls().is_empty());
    }

    #[test]
    fn test_add_note_payload() {
        let mut dialogs = ScriptedDialogs::new().with_prompt(Some("topped plants"));
        let mut bus = RecordingBus::new();

        assert!(add_note("run1", &mut dialogs, &mut bus));
        let call = bus.last().unwrap();
        assert_eq!(call.service, "add_note");
        assert_eq!(
            call.payload,
            json!({ "run_id": "run1", "text": "topped plants" })
        );
    }

    #[test]
    fn test_end_run_requires_confirmation() {
        let mut dialogs = ScriptedDialogs::new().with_confirm(false);
        let mut bus = RecordingBus::new();
        assert!(!end_run("run1", &mut dialogs, &mut bus));
        assert!(bus.calls().is_empty());

        let mut dialogs = ScriptedDialogs::new().with_confirm(true);
        assert!(end_run("run1", &mut dialogs, &mut bus));
        assert_eq!(bus.last().unwrap().payload, json!({ "run_id": "run1" }));
    }

    #[test]
    fn test_dispatch_routes_each_action() {
        let mut bus = RecordingBus::new();

        let mut dialogs = ScriptedDialogs::new().with_prompt(Some("Veg"));
        assert!(dispatch(Action::ChangePhase, "r", &mut dialogs, &mut bus));

        let mut dialogs = ScriptedDialogs::new().with_prompt(Some("note"));
        assert!(dispatch(Action::AddNote, "r", &mut dialogs, &mut bus));

        let mut dialogs = ScriptedDialogs::new().with_confirm(true);
        assert!(dispatch(Action::EndRun, "r", &mut dialogs, &mut bus));

        let services: Vec<&str> = bus.calls().iter().map(|c| c.service.as_str()).collect();
        assert_eq!(services, vec!["add_phase", "add_note", "end_run"]);
    }
}
