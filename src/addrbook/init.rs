use crate::api::AddressBookApi;
use crate::config::AddrBookConfig;
use crate::error::{AddrBookError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const HOME_ENV: &str = "ADDRBOOK_HOME";
pub const FILE_ENV: &str = "ADDRBOOK_FILE";

pub struct AddrBookContext {
    pub api: AddressBookApi<FileStore>,
    pub config: AddrBookConfig,
    pub home: PathBuf,
}

/// Explicit overrides, usually from command-line flags. Unset fields fall back
/// to the environment, then to defaults.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub home: Option<PathBuf>,
    pub file: Option<PathBuf>,
}

/// Home directory: explicit override, then `ADDRBOOK_HOME`, then the OS data dir.
pub fn resolve_home(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "addrbook", "addrbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AddrBookError::Store("Could not determine data directory".to_string()))
}

/// Snapshot path: explicit override, then `ADDRBOOK_FILE`, then the config's `data_file`.
pub fn resolve_data_path(explicit: Option<&Path>, config: &AddrBookConfig, home: &Path) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = std::env::var_os(FILE_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(path);
    }
    config.data_path(home)
}

pub fn initialize(overrides: &Overrides) -> Result<AddrBookContext> {
    let home = resolve_home(overrides.home.as_deref())?;
    let config = AddrBookConfig::load(&home).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config, using defaults");
        AddrBookConfig::default()
    });

    let data_path = resolve_data_path(overrides.file.as_deref(), &config, &home);
    debug!(home = %home.display(), data = %data_path.display(), "resolved paths");

    let api = AddressBookApi::open(FileStore::new(data_path), config.birthday_window_days)?;
    Ok(AddrBookContext { api, config, home })
}
