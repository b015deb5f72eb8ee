//! Persisted download directory: a single-line file under the config dir.
//!
//! The file holds one absolute path, UTF-8, with a trailing newline. It is
//! written on every successful directory change and read once at startup.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the single-line file inside the config dir.
const DOWNLOAD_DIR_FILE: &str = "download_dir";

/// Resolves the config dir: `$XDG_CONFIG_HOME/vdl` if set and non-empty,
/// else `$HOME/.config/vdl`, else `/tmp/.config/vdl` when `$HOME` is unset.
pub fn resolve_config_dir() -> PathBuf {
    config_dir_from(
        env::var_os("XDG_CONFIG_HOME").as_deref(),
        env::var_os("HOME").as_deref(),
    )
}

/// Home directory, or `/tmp` when `$HOME` is unset.
pub fn home_dir() -> PathBuf {
    home_dir_from(env::var_os("HOME").as_deref())
}

fn config_dir_from(xdg_config_home: Option<&OsStr>, home: Option<&OsStr>) -> PathBuf {
    if let Some(base) = xdg_config_home.filter(|v| !v.is_empty()) {
        return PathBuf::from(base).join("vdl");
    }
    home_dir_from(home).join(".config").join("vdl")
}

fn home_dir_from(home: Option<&OsStr>) -> PathBuf {
    match home.filter(|v| !v.is_empty()) {
        Some(home) => PathBuf::from(home),
        None => PathBuf::from("/tmp"),
    }
}

/// Loads and saves the user's chosen download directory.
///
/// Constructed over an explicit root so tests can point it at a temp dir;
/// `from_env` applies the XDG/HOME resolution rules.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn from_env() -> Self {
        Self::at(resolve_config_dir())
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the persisted download-dir file.
    pub fn file_path(&self) -> PathBuf {
        self.dir.join(DOWNLOAD_DIR_FILE)
    }

    /// Reads the saved directory. Strips one trailing newline; returns `None`
    /// when the file is missing or empty.
    pub fn load(&self) -> Option<PathBuf> {
        let data = fs::read_to_string(self.file_path()).ok()?;
        let line = data.strip_suffix('\n').unwrap_or(&data);
        if line.is_empty() {
            return None;
        }
        Some(PathBuf::from(line))
    }

    /// Overwrites the saved directory. Creates the config dir if missing.
    /// Only absolute paths are accepted; relative ones would be meaningless
    /// on the next run.
    pub fn save(&self, dir: &Path) -> io::Result<()> {
        if !dir.is_absolute() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("download directory must be absolute: {}", dir.display()),
            ));
        }
        fs::create_dir_all(&self.dir)?;
        fs::write(self.file_path(), format!("{}\n", dir.display()))?;
        tracing::debug!(dir = %dir.display(), "saved download directory");
        Ok(())
    }

    /// The saved directory, or `$HOME/Downloads` when nothing is saved yet.
    pub fn default_dir(&self) -> PathBuf {
        self.load().unwrap_or_else(|| home_dir().join("Downloads"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_prefers_xdg_config_home() {
        let dir = config_dir_from(Some(OsStr::new("/xdg")), Some(OsStr::new("/home/u")));
        assert_eq!(dir, PathBuf::from("/xdg/vdl"));
    }

    #[test]
    fn config_dir_ignores_empty_xdg_config_home() {
        let dir = config_dir_from(Some(OsStr::new("")), Some(OsStr::new("/home/u")));
        assert_eq!(dir, PathBuf::from("/home/u/.config/vdl"));
    }

    #[test]
    fn config_dir_falls_back_to_home() {
        let dir = config_dir_from(None, Some(OsStr::new("/home/u")));
        assert_eq!(dir, PathBuf::from("/home/u/.config/vdl"));
    }

    #[test]
    fn config_dir_falls_back_to_tmp_without_home() {
        assert_eq!(config_dir_from(None, None), PathBuf::from("/tmp/.config/vdl"));
        assert_eq!(
            config_dir_from(Some(OsStr::new("")), Some(OsStr::new(""))),
            PathBuf::from("/tmp/.config/vdl")
        );
    }

    #[test]
    fn save_then_load_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(tmp.path().join("vdl"));
        store.save(Path::new("/home/u/Videos")).unwrap();
        assert_eq!(store.load(), Some(PathBuf::from("/home/u/Videos")));
    }

    #[test]
    fn save_writes_single_line_with_trailing_newline() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(tmp.path().join("vdl"));
        store.save(Path::new("/data/media")).unwrap();
        let raw = fs::read_to_string(store.file_path()).unwrap();
        assert_eq!(raw, "/data/media\n");
    }

    #[test]
    fn save_overwrites_previous_value() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(tmp.path().join("vdl"));
        store.save(Path::new("/first")).unwrap();
        store.save(Path::new("/second")).unwrap();
        assert_eq!(store.load(), Some(PathBuf::from("/second")));
    }

    #[test]
    fn save_rejects_relative_path() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(tmp.path().join("vdl"));
        let err = store.save(Path::new("relative/dir")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn load_missing_file_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(tmp.path().join("vdl"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn load_empty_file_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(tmp.path());
        fs::write(store.file_path(), "").unwrap();
        assert_eq!(store.load(), None);
        fs::write(store.file_path(), "\n").unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn load_without_trailing_newline_still_works() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(tmp.path());
        fs::write(store.file_path(), "/home/u/Downloads").unwrap();
        assert_eq!(store.load(), Some(PathBuf::from("/home/u/Downloads")));
    }

    #[test]
    fn default_dir_prefers_saved_value() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(tmp.path().join("vdl"));
        store.save(Path::new("/srv/media")).unwrap();
        assert_eq!(store.default_dir(), PathBuf::from("/srv/media"));
    }
}
