//! Typed events the orchestrator emits for a presentation adapter.
//!
//! The orchestrator never touches UI state; an adapter (the CLI renderer
//! here, any widget toolkit elsewhere) consumes these and decides how to
//! draw them.

use tokio::sync::mpsc::{self, UnboundedReceiver};

/// One presentation-layer event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The status line changed.
    StatusChanged(String),
    /// Indeterminate progress tick; emitted periodically while a job is active.
    ProgressPulse,
    /// The progress indicator should show fully complete.
    ProgressComplete,
    /// The progress indicator should reset to empty.
    ProgressReset,
    /// Input controls (trigger, URL entry, format selector) on/off.
    ControlsEnabled(bool),
    /// Blocking error notice.
    ErrorDialog(String),
    /// Blocking info notice.
    InfoDialog(String),
}

/// Sending half of the orchestrator's event stream.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl EventSender {
    /// Creates a connected sender/receiver pair.
    pub fn channel() -> (Self, UnboundedReceiver<UiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Emits one event. A gone adapter must not fail the orchestrator, so a
    /// closed receiver is ignored.
    pub fn emit(&self, event: UiEvent) {
        let _ = self.tx.send(event);
    }

    pub fn status(&self, text: impl Into<String>) {
        self.emit(UiEvent::StatusChanged(text.into()));
    }

    pub fn controls(&self, enabled: bool) {
        self.emit(UiEvent::ControlsEnabled(enabled));
    }

    pub fn error_dialog(&self, text: impl Into<String>) {
        self.emit(UiEvent::ErrorDialog(text.into()));
    }

    pub fn info_dialog(&self, text: impl Into<String>) {
        self.emit(UiEvent::InfoDialog(text.into()));
    }
}
