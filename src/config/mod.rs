//! Runtime configuration.
//!
//! Three layers, later layers winning: built-in defaults, the optional user
//! config file (`~/.config/seedtree/config.toml`), and CLI flags. Numeric
//! fields are validated here; downstream components assume valid input.

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("folders must be positive")]
    NonPositiveFolders,

    #[error("files-per-folder must be positive")]
    NonPositiveFilesPerFolder,

    #[error("depths must be positive")]
    NonPositiveDepths,

    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parsing {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Fully resolved, validated configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Destination directory to fill.
    pub dest: PathBuf,
    /// Cache root as chosen; the run layer appends a tool subdirectory to
    /// explicit roots.
    pub cache_dir: PathBuf,
    /// Whether `cache_dir` is the shared default location (marker-guarded).
    pub cache_is_default: bool,
    /// Remove the cache root after the run.
    pub clean_cache: bool,
    /// Directories per level.
    pub folders: usize,
    /// Files in every directory.
    pub files_per_folder: usize,
    /// Tree depth; fractions shrink the deepest level.
    pub depths: f64,
    /// Skip the confirmation prompt.
    pub yes: bool,
    /// Delete destination contents before filling.
    pub wipe_dest: bool,
}

/// Built-in defaults (lowest layer).
#[derive(Debug, Clone)]
pub struct Defaults {
    pub folders: usize,
    pub files_per_folder: usize,
    pub depths: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            folders: 2,
            files_per_folder: 20,
            depths: 1.0,
        }
    }
}

/// The optional user config file (middle layer). All fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub folders: Option<usize>,
    pub files_per_folder: Option<usize>,
    pub depths: Option<f64>,
    pub cache_dir: Option<PathBuf>,
}

impl FileConfig {
    /// Parse a config file. The file must exist.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the default config file if present, an empty layer otherwise.
    pub fn load_default() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// CLI flag values (top layer). `None` means the flag was not given.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dest: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
    pub clean_cache: bool,
    pub folders: Option<usize>,
    pub files_per_folder: Option<usize>,
    pub depths: Option<f64>,
    pub yes: bool,
    pub wipe_dest: bool,
}

impl Config {
    /// Merge the three layers and validate the result.
    pub fn resolve(overrides: Overrides, file: FileConfig) -> Result<Self, ConfigError> {
        let defaults = Defaults::default();

        let (cache_dir, cache_is_default) = match overrides.cache_dir.or(file.cache_dir) {
            Some(dir) => (dir, false),
            None => (default_cache_dir(), true),
        };

        let cfg = Self {
            dest: overrides.dest.unwrap_or_else(|| PathBuf::from(".")),
            cache_dir,
            cache_is_default,
            clean_cache: overrides.clean_cache,
            folders: overrides.folders.or(file.folders).unwrap_or(defaults.folders),
            files_per_folder: overrides
                .files_per_folder
                .or(file.files_per_folder)
                .unwrap_or(defaults.files_per_folder),
            depths: overrides.depths.or(file.depths).unwrap_or(defaults.depths),
            yes: overrides.yes,
            wipe_dest: overrides.wipe_dest,
        };

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.folders == 0 {
            return Err(ConfigError::NonPositiveFolders);
        }
        if self.files_per_folder == 0 {
            return Err(ConfigError::NonPositiveFilesPerFolder);
        }
        if self.depths.is_nan() || self.depths <= 0.0 {
            return Err(ConfigError::NonPositiveDepths);
        }
        Ok(())
    }
}

/// The shared default cache location, guarded by the ownership marker.
pub fn default_cache_dir() -> PathBuf {
    env::temp_dir().join(".seedtree")
}

/// `~/.config/seedtree/config.toml`, when a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("seedtree")
            .join("config.toml")
    })
}
