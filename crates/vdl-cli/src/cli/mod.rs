//! CLI for the VDL media download launcher.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vdl_core::config;
use vdl_core::format::FormatId;
use vdl_core::store::ConfigStore;

use commands::{run_completions, run_dir, run_formats, run_get, run_play, run_tools};

/// Top-level CLI for the VDL media download launcher.
#[derive(Debug, Parser)]
#[command(name = "vdl")]
#[command(about = "VDL: front-end launcher for yt-dlp and mpv", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Format selector accepted by `vdl get --format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Best,
    Mp4,
    Webm,
    Audio,
}

impl FormatArg {
    pub fn id(self) -> FormatId {
        match self {
            FormatArg::Best => FormatId::BestQuality,
            FormatArg::Mp4 => FormatId::Mp4,
            FormatArg::Webm => FormatId::Webm,
            FormatArg::Audio => FormatId::AudioOnly,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a media URL with the selected format policy.
    Get {
        /// Source URL (any http/https URL, or a known video host).
        url: String,

        /// Output format policy.
        #[arg(long, value_enum, default_value = "best")]
        format: FormatArg,

        /// Download into this directory instead of the saved default.
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,
    },

    /// Stream a media URL in the player without downloading.
    Play {
        /// Source URL.
        url: String,
    },

    /// List the format policies and their availability.
    Formats,

    /// Show which external tools were found on the search path.
    Tools,

    /// Print the saved download directory, or save a new one.
    Dir {
        /// New default download directory (absolute path).
        path: Option<PathBuf>,
    },

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let store = ConfigStore::from_env();

        match cli.command {
            CliCommand::Get {
                url,
                format,
                download_dir,
            } => run_get(&cfg, &store, &url, format.id(), download_dir).await?,
            CliCommand::Play { url } => run_play(&cfg, &store, &url).await?,
            CliCommand::Formats => run_formats(&cfg),
            CliCommand::Tools => run_tools(&cfg),
            CliCommand::Dir { path } => run_dir(&store, path.as_deref())?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
