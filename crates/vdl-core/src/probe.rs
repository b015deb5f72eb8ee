//! Startup probe for the external tools.

use crate::config::VdlConfig;

/// Returns true if an executable named `tool` is reachable on the search
/// path. Path lookup only; the tool is never executed. Any lookup failure
/// counts as "unavailable" rather than an error.
pub fn probe(tool: &str) -> bool {
    which::which(tool).is_ok()
}

/// Which external tools were present at startup. Computed once, before any
/// job can start, and read-only for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityState {
    pub downloader_present: bool,
    pub player_present: bool,
}

impl AvailabilityState {
    /// Probes the configured downloader and player (one lookup each).
    pub fn probe(cfg: &VdlConfig) -> Self {
        let state = Self {
            downloader_present: probe(&cfg.downloader),
            player_present: probe(&cfg.player),
        };
        tracing::debug!(
            downloader = %cfg.downloader,
            present = state.downloader_present,
            player = %cfg.player,
            player_present = state.player_present,
            "probed external tools"
        );
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_finds_sh() {
        assert!(probe("sh"));
    }

    #[test]
    fn probe_missing_tool_is_false() {
        assert!(!probe("nonexistent-vdl-tool-xyz"));
    }

    #[test]
    fn probe_empty_name_is_false() {
        assert!(!probe(""));
    }
}
