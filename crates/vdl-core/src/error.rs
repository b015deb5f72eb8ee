//! Error taxonomy for starting a job.
//!
//! Everything here is handled at the `start()` boundary; no failure leaves
//! the orchestrator in a non-`Idle` state or with controls disabled. A child
//! process exiting nonzero is not an error value at all — it is the `Failed`
//! outcome reported by `Orchestrator::drive`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why `Orchestrator::start` refused or failed to launch a job.
#[derive(Debug, Error)]
pub enum StartError {
    /// A job is already launching or running; at most one runs at a time.
    #[error("a job is already running")]
    AlreadyRunning,

    /// The URL failed the acceptance heuristic.
    #[error("not a recognized video URL: {0:?}")]
    InvalidUrl(String),

    /// The selected format needs a tool that was not found at startup.
    #[error("{tool} is not installed")]
    ToolMissing { tool: String },

    /// The output directory could not be created.
    #[error("cannot create output directory {}: {source}", dir.display())]
    OutputDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Process creation itself failed (e.g. the binary vanished after the
    /// startup probe).
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}
