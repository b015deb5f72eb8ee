//! Resolves a job into the concrete command to spawn.
//!
//! The command is an explicit argv vector plus a working directory; nothing
//! is ever routed through a shell, so URLs and paths cannot be reinterpreted
//! as shell syntax no matter what they contain.

use std::path::PathBuf;

use crate::config::VdlConfig;
use crate::job::JobConfig;

/// A fully resolved external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: PathBuf,
}

/// Builds the command for `job`. The play policy invokes the player with the
/// configured quality directive; every other policy invokes the downloader
/// with its format argv. The URL is always the final, single argv element.
pub fn build(job: &JobConfig, cfg: &VdlConfig) -> CommandSpec {
    match job.format.policy().downloader_args {
        None => CommandSpec {
            program: cfg.player.clone(),
            args: vec![
                format!("--ytdl-format={}", cfg.play_quality),
                job.url.clone(),
            ],
            current_dir: job.output_dir.clone(),
        },
        Some(format_args) => {
            let mut args: Vec<String> = format_args.iter().map(|a| a.to_string()).collect();
            args.push(job.url.clone());
            CommandSpec {
                program: cfg.downloader.clone(),
                args,
                current_dir: job.output_dir.clone(),
            }
        }
    }
}
