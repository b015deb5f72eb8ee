//! `vdl get <url>` – download a media URL with the selected format policy.

use anyhow::Result;
use std::path::PathBuf;

use vdl_core::config::VdlConfig;
use vdl_core::format::FormatId;
use vdl_core::store::ConfigStore;

use super::launch::launch_job;

pub async fn run_get(
    cfg: &VdlConfig,
    store: &ConfigStore,
    url: &str,
    format: FormatId,
    download_dir: Option<PathBuf>,
) -> Result<()> {
    launch_job(cfg, store, url, format, download_dir).await
}
