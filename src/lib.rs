pub mod actions;
pub mod card;
pub mod classify;
pub mod config;
pub mod dialog;
pub mod editor;
pub mod entity;
pub mod error;
pub mod registry;
pub mod service;
pub mod tui;

pub use card::{render, Action, CardView, RenderState};
pub use config::CardConfig;
pub use editor::{discover_runs, CardEditor, ConfigSink};
pub use entity::{EntityState, Snapshot};
pub use error::{CardError, Result};
pub use service::ServiceBus;
