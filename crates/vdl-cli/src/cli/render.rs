//! Renders the orchestrator's event stream to the terminal.

use std::io::{self, Write};

use tokio::sync::mpsc::UnboundedReceiver;
use vdl_core::event::UiEvent;

/// Spinner frames for the indeterminate pulse.
const FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Consumes events until the orchestrator drops its sender. Pulse events
/// animate a spinner in place; status lines overwrite it.
pub async fn render_events(mut rx: UnboundedReceiver<UiEvent>) {
    let mut frame = 0usize;
    while let Some(event) = rx.recv().await {
        match event {
            UiEvent::StatusChanged(text) => println!("\r{text}"),
            UiEvent::ProgressPulse => {
                print!("\r{} ", FRAMES[frame % FRAMES.len()]);
                frame += 1;
                let _ = io::stdout().flush();
            }
            UiEvent::ProgressComplete => {
                println!("\rdone");
            }
            UiEvent::ProgressReset => {
                print!("\r  \r");
                let _ = io::stdout().flush();
            }
            // A terminal run has no persistent widgets to toggle.
            UiEvent::ControlsEnabled(_) => {}
            UiEvent::ErrorDialog(text) => eprintln!("\rerror: {text}"),
            UiEvent::InfoDialog(text) => println!("\r{text}"),
        }
    }
}
