//! Navigation Pipeline
//!
//! This example replays one navigation goal through the state machine.
//!
//! Key concepts:
//! - Events reported by an external navigation stack drive every transition
//! - Entry announcements flow through an injected sink, not hardwired output
//! - A failed controller run recovers and replans before succeeding
//!
//! Run with: cargo run --example navigation
//! Set RUST_LOG=navflow=info to also log announcements, or
//! RUST_LOG=navflow=debug to see every transition.

use navflow::core::StateRegistry;
use navflow::machine::Machine;
use navflow::nav::{NavContext, NavEvent, NavState};
use tracing_subscriber::EnvFilter;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .try_init();

    println!("=== Navigation Pipeline ===\n");

    let registry = StateRegistry::<NavState>::new().expect("navigation states are valid");
    let mut machine = Machine::<NavState>::builder(NavContext::default())
        .on_enter(move |id| {
            if let Some(state) = registry.resolve(id) {
                println!("{}", state.announcement());
            }
        })
        .build()
        .expect("navigation machine should build");

    let sequence = [
        NavEvent::Goal,
        NavEvent::PlanOk,
        NavEvent::ControlFail,
        NavEvent::RecoveryOk,
        NavEvent::PlanOk,
        NavEvent::ControlOk,
    ];

    for event in sequence {
        machine.react(event);
    }

    println!("\nVisited states:");
    for state in machine.history().get_path() {
        println!("  {:?}", state);
    }

    let context = machine.context();
    println!(
        "\nplans: {}, recoveries: {}, final: {}",
        context.plans,
        context.recoveries,
        machine.is_final()
    );

    println!("\n=== Example Complete ===");
}
