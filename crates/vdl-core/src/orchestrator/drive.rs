//! Completion observation plus the progress heartbeat.
//!
//! The heartbeat lives inside the completion loop, so it starts after the
//! controls-disabled event and stops the moment the job leaves the active
//! states; nothing polls widget state from the outside.

use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};

use crate::event::UiEvent;
use crate::job::{JobOutcome, JobState};

use super::Orchestrator;

impl Orchestrator {
    /// Waits for the in-flight job, emitting a `ProgressPulse` every
    /// `heartbeat_ms` until the child exits. Exit status zero is
    /// `Completed`; any other exit (nonzero code, signal, unobservable
    /// status) is `Failed`. Both paths re-enable controls and return the
    /// state to `Idle`. Returns `None` when no job is in flight.
    ///
    /// Cancelling a running job is not supported; this loop runs to child
    /// exit. An abort branch would slot into the `select!` below.
    pub async fn drive(&mut self) -> Option<JobOutcome> {
        let mut child = self.child.take()?;

        let period = Duration::from_millis(self.cfg.heartbeat_ms.max(1));
        let mut heartbeat = time::interval(period);
        heartbeat.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let status = loop {
            tokio::select! {
                _ = heartbeat.tick() => self.events.emit(UiEvent::ProgressPulse),
                status = child.wait() => break status,
            }
        };

        let outcome = match status {
            Ok(exit) if exit.success() => {
                self.state = JobState::Completed;
                self.events.status("Download completed successfully!");
                self.events.emit(UiEvent::ProgressComplete);
                tracing::info!("job completed");
                JobOutcome::Completed
            }
            Ok(exit) => {
                self.state = JobState::Failed;
                self.events.status("Download failed. Check URL and try again.");
                self.events.emit(UiEvent::ProgressReset);
                tracing::warn!("job failed: {exit}");
                JobOutcome::Failed
            }
            Err(err) => {
                self.state = JobState::Failed;
                self.events.status("Download failed. Check URL and try again.");
                self.events.emit(UiEvent::ProgressReset);
                tracing::warn!("could not observe job exit: {err}");
                JobOutcome::Failed
            }
        };

        self.events.controls(true);
        self.state = JobState::Idle;
        Some(outcome)
    }
}
