//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the
//! [`WorkspaceSettings`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STACKVIEW__<SECTION>__<KEY>`, lists
//!    comma-separated (e.g. `STACKVIEW__WORKSPACE__WATCH=pages,hooks`)
//! 3. `--config FILE`, or else `.stackview.toml` in the current directory
//!    layered over the user config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use stackview_adapters::watcher::DEFAULT_DEBOUNCE_MS;
use stackview_core::domain::{DEFAULT_SCAN_CONCURRENCY, WorkspaceSettings};

use crate::cli::TreeFormat;

/// File name of the per-project configuration.
pub const LOCAL_CONFIG_FILE: &str = ".stackview.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "STACKVIEW";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Workspace enumeration and scanning.
    pub workspace: WorkspaceConfig,
    /// File watcher settings.
    pub watcher: WatcherSection,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Workspace root; the current directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub watch: Vec<String>,
    pub show_path: bool,
    pub scan_concurrency: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatcherSection {
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Default render style for `tree` and `watch`.
    pub format: TreeFormat,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        let settings = WorkspaceSettings::default();
        Self {
            root: None,
            include: settings.include,
            exclude: settings.exclude,
            watch: settings.watch,
            show_path: settings.show_path,
            scan_concurrency: DEFAULT_SCAN_CONCURRENCY,
        }
    }
}

impl Default for WatcherSection {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: TreeFormat::Tree,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: WorkspaceConfig::default(),
            watcher: WatcherSection::default(),
            output: OutputConfig::default(),
        }
    }
}

impl WorkspaceConfig {
    /// Settings handed to the core.
    pub fn settings(&self) -> WorkspaceSettings {
        WorkspaceSettings {
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            watch: self.watch.clone(),
            show_path: self.show_path,
            scan_concurrency: self.scan_concurrency,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, config files and the environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist.
    /// Without it, the user config file and `.stackview.toml` are both
    /// optional layers.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(config_file, Path::new("."))
    }

    fn load_from(config_file: Option<&PathBuf>, cwd: &Path) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default()).context("Failed to encode defaults")?;
        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml));
            }
            None => {
                builder = builder
                    .add_source(
                        File::from(Self::config_path())
                            .format(FileFormat::Toml)
                            .required(false),
                    )
                    .add_source(
                        File::from(cwd.join(LOCAL_CONFIG_FILE))
                            .format(FileFormat::Toml)
                            .required(false),
                    );
            }
        }

        let config: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("workspace.include")
                    .with_list_parse_key("workspace.exclude")
                    .with_list_parse_key("workspace.watch"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values the core would refuse later.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.workspace
            .settings()
            .validate()
            .context("Invalid [workspace] section")?;
        Ok(())
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stackview.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stackview", "stackview")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The file that wins resolution: `--config`, else a local
    /// `.stackview.toml`, else the user config file.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        if let Some(path) = config_file {
            return path.clone();
        }
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            local
        } else {
            Self::config_path()
        }
    }

    /// Workspace root: `--root`, then `workspace.root`, then the current
    /// directory.
    pub fn resolve_root(&self, flag: Option<&PathBuf>) -> PathBuf {
        flag.or(self.workspace.root.as_ref())
            .cloned()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
