//! `vdl dir` – print or persist the default download directory.

use anyhow::{ensure, Context, Result};
use std::path::Path;

use vdl_core::store::ConfigStore;

pub fn run_dir(store: &ConfigStore, path: Option<&Path>) -> Result<()> {
    match path {
        None => println!("{}", store.default_dir().display()),
        Some(dir) => {
            ensure!(
                dir.is_absolute(),
                "download directory must be an absolute path"
            );
            store
                .save(dir)
                .with_context(|| format!("save download directory {}", dir.display()))?;
            println!("Saved download directory: {}", dir.display());
        }
    }
    Ok(())
}
