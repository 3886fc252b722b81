//! Terminal front-end for the PlantRun card.
//!
//! Hosts the card view in a crossterm/ratatui event loop. The card logic
//! itself stays host-agnostic: every frame re-derives the render state from
//! (config, snapshot) through [`crate::card::render`], actions go out
//! through the [`ServiceBus`] seam, and text input comes in through the
//! [`Dialogs`] seam. Dialogs suspend the alternate screen while they block
//! on stdin, then the loop resumes.

pub mod ui;

pub use ui::CardFrame;

use crate::card::{self, Action, RenderState};
use crate::config::CardConfig;
use crate::dialog::Dialogs;
use crate::entity::Snapshot;
use crate::error::Result;
use crate::service::ServiceBus;
use crate::actions;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Duration;

/// How long to wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Run the card in the terminal until the user quits.
pub fn run(
    config: &CardConfig,
    snapshot: &Snapshot,
    dialogs: &mut dyn Dialogs,
    bus: &mut dyn ServiceBus,
) -> Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config, snapshot, dialogs, bus);

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &CardConfig,
    snapshot: &Snapshot,
    dialogs: &mut dyn Dialogs,
    bus: &mut dyn ServiceBus,
) -> Result<()> {
    let mut selected: usize = 0;
    let mut last_call: Option<String> = None;

    loop {
        // Pure render pass: the state is whatever the inputs say right now.
        let state = card::render(config, snapshot);
        let action_count = state.view().map_or(0, |view| view.actions.len());
        if action_count > 0 {
            selected = selected.min(action_count - 1);
        }

        terminal.draw(|frame| {
            ui::render(
                frame,
                &CardFrame {
                    state: &state,
                    selected_action: selected,
                    last_call: last_call.as_deref(),
                },
            )
        })?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let dispatched = match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => break,
            (KeyCode::Left, _) => {
                selected = selected.saturating_sub(1);
                None
            }
            (KeyCode::Right, _) if action_count > 0 => {
                selected = (selected + 1).min(action_count - 1);
                None
            }
            (KeyCode::Char('p'), _) => Some(Action::ChangePhase),
            (KeyCode::Char('n'), _) => Some(Action::AddNote),
            (KeyCode::Char('e'), _) => Some(Action::EndRun),
            (KeyCode::Enter, _) => state
                .view()
                .and_then(|view| view.actions.get(selected))
                .map(|button| button.action),
            _ => None,
        };

        if let Some(action) = dispatched {
            // Action keys only work while the run is active.
            if state.actions_visible() {
                if let Some(call) = dispatch_action(&state, action, dialogs, bus)? {
                    last_call = Some(call);
                }
            }
        }
    }

    Ok(())
}

/// Suspend the TUI, run the action's dialog, dispatch, and resume. Returns
/// a summary of the issued call, or `None` when the dialog was cancelled.
fn dispatch_action(
    state: &RenderState,
    action: Action,
    dialogs: &mut dyn Dialogs,
    bus: &mut dyn ServiceBus,
) -> Result<Option<String>> {
    let Some(view) = state.view() else {
        return Ok(None);
    };

    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    let issued = actions::dispatch(action, &view.run_id, dialogs, bus);
    execute!(stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;

    if !issued {
        return Ok(None);
    }
    let service = match action {
        Action::ChangePhase => "plantrun.add_phase",
        Action::AddNote => "plantrun.add_note",
        Action::EndRun => "plantrun.end_run",
    };
    Ok(Some(service.to_string()))
}
