use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::store;

/// Global configuration loaded from `~/.config/vdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VdlConfig {
    /// Downloader binary, searched on PATH when not an absolute path.
    #[serde(default = "default_downloader")]
    pub downloader: String,
    /// Player binary for the play-without-downloading policy.
    #[serde(default = "default_player")]
    pub player: String,
    /// Indeterminate progress pulse interval in milliseconds.
    #[serde(default = "default_heartbeat_ms")]
    pub heartbeat_ms: u64,
    /// Format directive handed to the player via `--ytdl-format=`.
    #[serde(default = "default_play_quality")]
    pub play_quality: String,
}

fn default_downloader() -> String {
    "yt-dlp".to_string()
}

fn default_player() -> String {
    "mpv".to_string()
}

fn default_heartbeat_ms() -> u64 {
    100
}

fn default_play_quality() -> String {
    "bestvideo+bestaudio/best".to_string()
}

impl Default for VdlConfig {
    fn default() -> Self {
        Self {
            downloader: default_downloader(),
            player: default_player(),
            heartbeat_ms: default_heartbeat_ms(),
            play_quality: default_play_quality(),
        }
    }
}

pub fn config_path() -> PathBuf {
    store::resolve_config_dir().join("config.toml")
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VdlConfig> {
    let path = config_path();
    if !path.exists() {
        let default_cfg = VdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: VdlConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = VdlConfig::default();
        assert_eq!(cfg.downloader, "yt-dlp");
        assert_eq!(cfg.player, "mpv");
        assert_eq!(cfg.heartbeat_ms, 100);
        assert_eq!(cfg.play_quality, "bestvideo+bestaudio/best");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = VdlConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: VdlConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.downloader, cfg.downloader);
        assert_eq!(parsed.player, cfg.player);
        assert_eq!(parsed.heartbeat_ms, cfg.heartbeat_ms);
        assert_eq!(parsed.play_quality, cfg.play_quality);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            downloader = "/opt/yt-dlp/yt-dlp"
            player = "mpv-git"
            heartbeat_ms = 250
        "#;
        let cfg: VdlConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.downloader, "/opt/yt-dlp/yt-dlp");
        assert_eq!(cfg.player, "mpv-git");
        assert_eq!(cfg.heartbeat_ms, 250);
        assert_eq!(cfg.play_quality, "bestvideo+bestaudio/best");
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: VdlConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.downloader, "yt-dlp");
        assert_eq!(cfg.player, "mpv");
    }
}
