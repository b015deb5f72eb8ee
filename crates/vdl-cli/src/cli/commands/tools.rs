//! `vdl tools` – report which external tools are installed.

use vdl_core::config::VdlConfig;
use vdl_core::probe::AvailabilityState;

pub fn run_tools(cfg: &VdlConfig) {
    let availability = AvailabilityState::probe(cfg);
    let mark = |present: bool| if present { "found" } else { "missing" };
    println!(
        "{:<12} {}",
        cfg.downloader,
        mark(availability.downloader_present)
    );
    println!("{:<12} {}", cfg.player, mark(availability.player_present));

    if !availability.downloader_present && !availability.player_present {
        println!();
        println!(
            "Neither {} nor {} is installed. Install at least one:",
            cfg.downloader, cfg.player
        );
        println!("  sudo pacman -S yt-dlp mpv    (Arch)");
        println!("  sudo apt install yt-dlp mpv  (Debian/Ubuntu)");
        println!("  brew install yt-dlp mpv      (macOS)");
    } else if !availability.downloader_present {
        println!();
        println!(
            "{} is not installed; only `vdl play` is available.",
            cfg.downloader
        );
    }
}
