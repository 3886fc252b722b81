//! plantrun-card demo entry point.
//!
//! Hosts the card against a built-in demo snapshot so the whole pipeline
//! (snapshot → classify → render → action dispatch) can be exercised in a
//! terminal without a home-automation backend. Service calls land in a
//! recording bus and are printed on exit.

use clap::{Parser, Subcommand};
use plantrun_card::config::CardConfig;
use plantrun_card::dialog::{TerminalDialogs, BOLD, CYAN, GRAY, RED, RESET};
use plantrun_card::editor::discover_runs;
use plantrun_card::entity::{Attributes, EntityState, Snapshot};
use plantrun_card::registry::default_registry;
use plantrun_card::service::RecordingBus;
use plantrun_card::tui;
use std::process;

#[derive(Parser)]
#[command(name = "plantrun-card")]
#[command(
    version,
    about = "Terminal demo of the PlantRun dashboard card",
    after_help = "EXAMPLES:
    # Show the demo run's card
    plantrun-card

    # Point the card at a different run id (missing ids show the error panel)
    plantrun-card --run-id tent_b

    # List runs discoverable in the demo snapshot
    plantrun-card runs

    # Print the card's registration descriptor
    plantrun-card describe"
)]
struct Cli {
    /// Run id to configure the card with
    #[arg(long, default_value = "tent_a")]
    run_id: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the runs the editor would discover in the demo snapshot
    Runs,
    /// Print the card's registration descriptor
    Describe,
}

fn main() {
    let cli = Cli::parse();
    let snapshot = demo_snapshot();

    match cli.command {
        Some(Commands::Runs) => {
            println!("{BOLD}Available Runs:{RESET}");
            for run in discover_runs(&snapshot) {
                println!("  {} {GRAY}({}){RESET}", run.name, run.id);
            }
        }
        Some(Commands::Describe) => {
            let registry = default_registry();
            for descriptor in registry.iter() {
                println!("{BOLD}{}{RESET} ({})", descriptor.name, descriptor.card_type);
                println!("  {GRAY}{}{RESET}", descriptor.description);
                println!("  preview: {}", descriptor.preview);
            }
        }
        None => {
            if let Err(error) = run_demo(&cli.run_id, &snapshot) {
                eprintln!("{RED}Error:{RESET} {error}");
                process::exit(1);
            }
        }
    }
}

fn run_demo(run_id: &str, snapshot: &Snapshot) -> plantrun_card::Result<()> {
    let config = CardConfig::new(run_id);
    // Same rejection the host's config UI would surface.
    config.validated()?;

    let mut dialogs = TerminalDialogs;
    let mut bus = RecordingBus::new();
    tui::run(&config, snapshot, &mut dialogs, &mut bus)?;

    if bus.calls().is_empty() {
        println!("{GRAY}No service calls issued.{RESET}");
    } else {
        println!("{BOLD}Service calls issued:{RESET}");
        for call in bus.calls() {
            println!(
                "  {CYAN}{}.{}{RESET} {}",
                call.domain, call.service, call.payload
            );
        }
    }
    Ok(())
}

/// Snapshot of a single active demo run with a spread of proxy metrics,
/// including one unclassified sensor that falls back to its own icon hint.
fn demo_snapshot() -> Snapshot {
    let named = |id: &str, state: &str, name: &str, unit: Option<&str>| {
        EntityState::new(id, state).with_attributes(Attributes {
            friendly_name: Some(name.to_string()),
            unit_of_measurement: unit.map(String::from),
            ..Attributes::default()
        })
    };

    [
        named(
            "sensor.plantrun_status_tent_a",
            "active",
            "Tent A Status",
            None,
        ),
        named(
            "sensor.plantrun_active_phase_tent_a",
            "Vegetative",
            "Tent A Active Phase",
            None,
        ),
        EntityState::new("sensor.plantrun_cultivar_tent_a", "Blue Dream").with_attributes(
            Attributes {
                friendly_name: Some("Tent A Cultivar".to_string()),
                breeder: Some("Humboldt".to_string()),
                ..Attributes::default()
            },
        ),
        named("sensor.plantrun_temp_tent_a", "24.3", "Temperature", Some("°C")),
        named("sensor.plantrun_humidity_tent_a", "61", "Humidity", Some("%")),
        named("sensor.plantrun_power_tent_a", "412", "Power", Some("W")),
        named("sensor.plantrun_light_tent_a", "14200", "Light", Some("lx")),
        named(
            "sensor.plantrun_soil_moisture_tent_a",
            "38",
            "Soil Moisture",
            Some("%"),
        ),
        named("sensor.plantrun_door_tent_a", "closed", "Door", None),
        EntityState::new("sensor.plantrun_ph_tent_a", "6.1").with_attributes(Attributes {
            friendly_name: Some("pH".to_string()),
            icon: Some("mdi:ph".to_string()),
            ..Attributes::default()
        }),
        named(
            "sensor.plantrun_status_tent_b",
            "ended",
            "Tent B Status",
            None,
        ),
        named(
            "sensor.plantrun_active_phase_tent_b",
            "Harvest",
            "Tent B Active Phase",
            None,
        ),
    ]
    .into_iter()
    .collect()
}
