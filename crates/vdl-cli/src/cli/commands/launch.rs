//! Shared launch path for `get` and `play`: probe, build the job, start it,
//! and render its event stream to completion.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use vdl_core::config::VdlConfig;
use vdl_core::event::EventSender;
use vdl_core::format::FormatId;
use vdl_core::job::{JobConfig, JobOutcome};
use vdl_core::orchestrator::Orchestrator;
use vdl_core::probe::AvailabilityState;
use vdl_core::store::ConfigStore;

use crate::cli::render;

pub async fn launch_job(
    cfg: &VdlConfig,
    store: &ConfigStore,
    url: &str,
    format: FormatId,
    download_dir: Option<PathBuf>,
) -> Result<()> {
    let availability = AvailabilityState::probe(cfg);

    // The persisted directory is always absolute, so anchor a relative
    // --download-dir at the current directory before the job sees it.
    let output_dir = match download_dir {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => std::env::current_dir()
            .context("resolve current directory")?
            .join(dir),
        None => store.default_dir(),
    };

    let (events, rx) = EventSender::channel();
    let renderer = tokio::spawn(render::render_events(rx));

    let mut orch = Orchestrator::new(cfg.clone(), availability, store.clone(), events);
    orch.announce_availability();
    let started = orch.start(JobConfig {
        url: url.to_string(),
        format,
        output_dir,
    });

    let outcome = match started {
        Ok(()) => orch.drive().await,
        Err(err) => {
            // The renderer already printed the notice carried by the event;
            // dropping the orchestrator closes the channel so it finishes.
            drop(orch);
            let _ = renderer.await;
            return Err(err.into());
        }
    };
    drop(orch);
    let _ = renderer.await;

    if outcome == Some(JobOutcome::Failed) {
        bail!("job did not complete");
    }
    Ok(())
}
