//! `vdl formats` – list the format policies and their availability.

use vdl_core::config::VdlConfig;
use vdl_core::format::{self, POLICIES};
use vdl_core::probe::AvailabilityState;

pub fn run_formats(cfg: &VdlConfig) {
    let availability = AvailabilityState::probe(cfg);
    println!("{:<8} {}", "ID", "LABEL");
    for policy in &POLICIES {
        println!(
            "{:<8} {}",
            policy.id.as_str(),
            policy.label_for(availability, cfg)
        );
    }
    match format::default_selection(availability) {
        Some(id) => println!("\nDefault: {}", id.as_str()),
        None => println!("\nNo format is currently usable; see `vdl tools`."),
    }
}
