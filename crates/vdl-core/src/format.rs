//! Format policy table: the fixed output policies and their downloader argv.
//!
//! Five entries, defined once. The play entry carries no downloader argv;
//! it signals the command builder to use the player tool instead.

use crate::config::VdlConfig;
use crate::probe::AvailabilityState;

/// Identifier for one of the fixed format policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatId {
    BestQuality,
    Mp4,
    Webm,
    AudioOnly,
    Play,
}

impl FormatId {
    pub fn as_str(self) -> &'static str {
        match self {
            FormatId::BestQuality => "best",
            FormatId::Mp4 => "mp4",
            FormatId::Webm => "webm",
            FormatId::AudioOnly => "audio",
            FormatId::Play => "play",
        }
    }

    /// The table entry for this id.
    pub fn policy(self) -> &'static FormatPolicy {
        match self {
            FormatId::BestQuality => &POLICIES[0],
            FormatId::Mp4 => &POLICIES[1],
            FormatId::Webm => &POLICIES[2],
            FormatId::AudioOnly => &POLICIES[3],
            FormatId::Play => &POLICIES[4],
        }
    }
}

/// One policy: human label plus downloader argv. `downloader_args` is `None`
/// for the play-without-downloading policy.
#[derive(Debug, Clone, Copy)]
pub struct FormatPolicy {
    pub id: FormatId,
    pub label: &'static str,
    pub downloader_args: Option<&'static [&'static str]>,
}

/// The fixed ordered policy table; order matches presentation order.
pub const POLICIES: [FormatPolicy; 5] = [
    FormatPolicy {
        id: FormatId::BestQuality,
        label: "Best Quality",
        downloader_args: Some(&["-cif", "bestvideo+bestaudio/best"]),
    },
    FormatPolicy {
        id: FormatId::Mp4,
        label: "MP4 (Video)",
        downloader_args: Some(&["-cif", "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best"]),
    },
    FormatPolicy {
        id: FormatId::Webm,
        label: "WebM (Video)",
        downloader_args: Some(&[
            "-cif",
            "bestvideo[ext=webm]+bestaudio[ext=webm]/best[ext=webm]/best",
        ]),
    },
    FormatPolicy {
        id: FormatId::AudioOnly,
        label: "M4A (Audio)",
        downloader_args: Some(&["-cif", "bestaudio[ext=m4a]"]),
    },
    FormatPolicy {
        id: FormatId::Play,
        label: "Play in mpv",
        downloader_args: None,
    },
];

impl FormatPolicy {
    /// True if the tool this policy needs was present at startup.
    pub fn selectable(&self, availability: AvailabilityState) -> bool {
        match self.downloader_args {
            Some(_) => availability.downloader_present,
            None => availability.player_present,
        }
    }

    /// Human label, suffixed with the missing tool when unselectable.
    /// Presentation metadata only; the selectability gate is `selectable`.
    pub fn label_for(&self, availability: AvailabilityState, cfg: &VdlConfig) -> String {
        if self.selectable(availability) {
            return self.label.to_string();
        }
        let tool = match self.downloader_args {
            Some(_) => &cfg.downloader,
            None => &cfg.player,
        };
        format!("{} ({} not installed)", self.label, tool)
    }
}

/// Initial selection: best quality when the downloader is present, else the
/// play policy when the player is, else nothing is selectable.
pub fn default_selection(availability: AvailabilityState) -> Option<FormatId> {
    if availability.downloader_present {
        Some(FormatId::BestQuality)
    } else if availability.player_present {
        Some(FormatId::Play)
    } else {
        None
    }
}
