// pathify/src/config.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::list_kind::ListKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace};

pub const ENV_STORAGE_DIR: &str = "PATHIFY_STORAGE_DIR";
pub const ENV_PATHS_FILE: &str = "PATHIFY_PATHS_FILE";
pub const ENV_MARKED_FILE: &str = "PATHIFY_MARKED_FILE";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding both list files; `~` and `$VAR` are expanded
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,

    /// File name of the general path list
    #[serde(default = "default_paths_file")]
    pub paths_file: String,

    /// File name of the marked path list
    #[serde(default = "default_marked_file")]
    pub marked_file: String,
}

fn default_storage_dir() -> String {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config/pathify")
        .to_string_lossy()
        .into_owned()
}

fn default_paths_file() -> String {
    "paths".to_string()
}

fn default_marked_file() -> String {
    "marked_paths".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            paths_file: default_paths_file(),
            marked_file: default_marked_file(),
        }
    }
}

impl Settings {
    /// Settings rooted at an explicit storage directory, default file names.
    pub fn with_storage_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            storage_dir: dir.as_ref().to_string_lossy().into_owned(),
            ..Self::default()
        }
    }

    /// Storage directory with `~` and environment variables expanded.
    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::full(&self.storage_dir).map_or_else(
            |e| {
                debug!("Cannot expand storage dir {}: {}", self.storage_dir, e);
                self.storage_dir.clone()
            },
            |expanded| expanded.into_owned(),
        ))
    }

    /// Location of the file backing the given list.
    pub fn list_path(&self, kind: ListKind) -> PathBuf {
        let file = match kind {
            ListKind::General => &self.paths_file,
            ListKind::Marked => &self.marked_file,
        };
        self.storage_path().join(file)
    }
}

fn default_config_file() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config/pathify/config.toml"))
}

/// Load settings: defaults, then the config file, then environment variables.
///
/// An explicitly given config file must exist and parse; the default location
/// is optional and skipped when missing or unreadable.
#[instrument(level = "debug")]
pub fn load_settings(config_file: Option<&Path>) -> DomainResult<Settings> {
    trace!("Loading settings");

    let mut settings = match config_file {
        Some(path) => read_config_file(path)?,
        None => match default_config_file() {
            Some(path) if path.exists() => read_config_file(&path).unwrap_or_else(|e| {
                debug!("Ignoring default config file: {}", e);
                Settings::default()
            }),
            _ => Settings::default(),
        },
    };

    if let Ok(dir) = std::env::var(ENV_STORAGE_DIR) {
        trace!("Using {} from environment: {}", ENV_STORAGE_DIR, dir);
        settings.storage_dir = dir;
    }
    if let Ok(file) = std::env::var(ENV_PATHS_FILE) {
        trace!("Using {} from environment: {}", ENV_PATHS_FILE, file);
        settings.paths_file = file;
    }
    if let Ok(file) = std::env::var(ENV_MARKED_FILE) {
        trace!("Using {} from environment: {}", ENV_MARKED_FILE, file);
        settings.marked_file = file;
    }

    trace!("Settings loaded: {:?}", settings);
    Ok(settings)
}

fn read_config_file(path: &Path) -> DomainResult<Settings> {
    trace!("Loading config from: {:?}", path);
    let text = std::fs::read_to_string(path).map_err(|source| DomainError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<Settings>(&text)
        .map_err(|e| DomainError::Config(format!("{}: {}", path.display(), e)))
}

pub fn generate_default_config() -> String {
    toml::to_string_pretty(&Settings::default())
        .unwrap_or_else(|_| "# Error generating default configuration".to_string())
}
