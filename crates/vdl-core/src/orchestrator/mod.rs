//! The single-job orchestrator.
//!
//! Owns the availability state, the config store, the event stream, and the
//! one job slot. Lifecycle: Idle → Launching → Running → {Completed, Failed}
//! → Idle; `start` rejects anything but Idle. No retry: a failed job is
//! terminal for that attempt and the user re-triggers manually.

mod drive;

use std::fs;
use std::process::Stdio;
use tokio::process::{Child, Command};

use crate::command::{self, CommandSpec};
use crate::config::VdlConfig;
use crate::error::StartError;
use crate::event::EventSender;
use crate::format::FormatId;
use crate::job::{JobConfig, JobState};
use crate::probe::AvailabilityState;
use crate::store::ConfigStore;
use crate::validate;

pub struct Orchestrator {
    cfg: VdlConfig,
    availability: AvailabilityState,
    store: ConfigStore,
    events: EventSender,
    state: JobState,
    child: Option<Child>,
}

impl Orchestrator {
    pub fn new(
        cfg: VdlConfig,
        availability: AvailabilityState,
        store: ConfigStore,
        events: EventSender,
    ) -> Self {
        Self {
            cfg,
            availability,
            store,
            events,
            state: JobState::Idle,
            child: None,
        }
    }

    pub fn state(&self) -> JobState {
        self.state
    }

    pub fn availability(&self) -> AvailabilityState {
        self.availability
    }

    /// Startup dependency notice: a blocking error when neither tool is
    /// present, an info notice when only the player is. No-op when the
    /// downloader is available.
    pub fn announce_availability(&self) {
        if !self.availability.downloader_present && !self.availability.player_present {
            self.events.error_dialog(format!(
                "Neither {} nor {} is installed. Install at least one.",
                self.cfg.downloader, self.cfg.player
            ));
        } else if !self.availability.downloader_present {
            self.events.info_dialog(format!(
                "{} is not installed. Only playback is available.",
                self.cfg.downloader
            ));
        }
    }

    /// Validates and launches `job`. Callable only in `Idle`; any other
    /// state is `AlreadyRunning`. On success the child runs detached and
    /// the state is `Running`; await `drive` to observe completion. Every
    /// failure path leaves the state `Idle` with controls enabled.
    pub fn start(&mut self, job: JobConfig) -> Result<(), StartError> {
        if self.state != JobState::Idle {
            return Err(StartError::AlreadyRunning);
        }

        if !validate::validate(&job.url) {
            self.events.error_dialog("Please enter a valid video URL.");
            return Err(StartError::InvalidUrl(job.url));
        }

        let policy = job.format.policy();
        if !policy.selectable(self.availability) {
            let tool = match policy.downloader_args {
                Some(_) => self.cfg.downloader.clone(),
                None => self.cfg.player.clone(),
            };
            self.events.status(format!("{tool} is not installed"));
            return Err(StartError::ToolMissing { tool });
        }

        if let Err(source) = fs::create_dir_all(&job.output_dir) {
            self.events.error_dialog("Failed to create download directory.");
            return Err(StartError::OutputDir {
                dir: job.output_dir.clone(),
                source,
            });
        }

        // Best-effort persistence of the chosen directory; a failed write
        // must not block the job.
        if let Err(err) = self.store.save(&job.output_dir) {
            tracing::warn!("could not persist download directory: {err}");
        }

        let status = if job.format == FormatId::Play {
            format!("Opening in {}...", self.cfg.player)
        } else {
            "Downloading...".to_string()
        };
        let spec = command::build(&job, &self.cfg);
        self.launch(spec, status)
    }

    /// Disables controls, announces `status`, and spawns `spec`. The spawn
    /// itself is the last fallible step; on failure everything is rolled
    /// back to Idle with controls re-enabled.
    fn launch(&mut self, spec: CommandSpec, status: String) -> Result<(), StartError> {
        self.state = JobState::Launching;
        self.events.controls(false);
        self.events.status(status);

        tracing::info!(
            program = %spec.program,
            dir = %spec.current_dir.display(),
            "launching job"
        );

        // stdout is never parsed; the job is tracked by exit status only.
        let spawned = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&spec.current_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => {
                self.child = Some(child);
                self.state = JobState::Running;
                Ok(())
            }
            Err(source) => {
                self.state = JobState::Failed;
                tracing::warn!(program = %spec.program, "spawn failed: {source}");
                self.events.error_dialog(source.to_string());
                self.events.status("Ready");
                self.events.controls(true);
                self.state = JobState::Idle;
                Err(StartError::Spawn {
                    program: spec.program,
                    source,
                })
            }
        }
    }
}
