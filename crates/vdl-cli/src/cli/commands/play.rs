//! `vdl play <url>` – stream a media URL in the player without downloading.

use anyhow::Result;

use vdl_core::config::VdlConfig;
use vdl_core::format::FormatId;
use vdl_core::store::ConfigStore;

use super::launch::launch_job;

pub async fn run_play(cfg: &VdlConfig, store: &ConfigStore, url: &str) -> Result<()> {
    launch_job(cfg, store, url, FormatId::Play, None).await
}
