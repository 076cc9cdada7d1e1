//! Thermostat
//!
//! A two-level machine: `Powered` polls a temperature sensor on every tick,
//! and its children `Idle` and `Heating` react to the shared reading.
//!
//! Key concepts:
//! - Parent handle actions run before child handle actions
//! - Sibling transitions never exit or re-enter the shared parent
//! - Guards read caller-owned state captured by closures
//!
//! Run with: RUST_LOG=nestate=trace cargo run --example thermostat

use nestate::{MachineBuilder, State, Transition};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const TARGET: i32 = 20;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Thermostat Example ===\n");

    let reading = Arc::new(AtomicI32::new(17));
    let (sensor, heater, cold, warm) = (
        Arc::clone(&reading),
        Arc::clone(&reading),
        Arc::clone(&reading),
        Arc::clone(&reading),
    );

    let mut builder = MachineBuilder::new();
    let powered = builder.add_state(
        State::new("Powered")
            .on_entry(|| println!("  power on"))
            .on_handle(move || {
                println!("  sensor reads {}", sensor.load(Ordering::SeqCst));
            }),
    );
    let idle = builder.add_state(
        State::new("Idle")
            .parent(powered)
            .on_entry(|| println!("  idling")),
    );
    let heating = builder.add_state(
        State::new("Heating")
            .parent(powered)
            .on_entry(|| println!("  heater on"))
            .on_exit(|| println!("  heater off"))
            .on_handle(move || {
                heater.fetch_add(1, Ordering::SeqCst);
            }),
    );

    builder
        .add_transition(Transition::new(idle, heating, move || {
            cold.load(Ordering::SeqCst) < TARGET
        }))
        .add_transition(
            Transition::new(heating, idle, move || warm.load(Ordering::SeqCst) >= TARGET)
                .action(|| println!("  target reached")),
        );

    let mut engine = match builder.build(idle) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("invalid machine: {err}");
            return;
        }
    };

    for tick in 1..=6 {
        println!("tick {tick}:");
        let step = engine.process();
        println!("  -> {} ({:?})\n", engine.current_name(), step);
    }

    println!("Active path: {:?}", engine.snapshot().active_path);
    println!("\n=== Example Complete ===");
}
