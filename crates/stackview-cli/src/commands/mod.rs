//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod inflect;
pub mod init;
pub mod tree;
pub mod watch;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use stackview_adapters::LocalWorkspace;

use crate::{
    cli::{GlobalArgs, OutputFormat, TreeFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
};

/// Multi-threaded runtime for commands that talk to providers.
pub(crate) fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .with_cli_context(|| "Failed to start async runtime")
}

/// Resolve and open the workspace root.
pub(crate) fn open_workspace(
    config: &AppConfig,
    root_flag: Option<&PathBuf>,
) -> CliResult<(PathBuf, Arc<LocalWorkspace>)> {
    let requested = config.resolve_root(root_flag);
    let root = canonical_dir(&requested)?;
    let workspace = LocalWorkspace::new(&root, &config.workspace.settings())?;
    Ok((root, Arc::new(workspace)))
}

fn canonical_dir(path: &Path) -> CliResult<PathBuf> {
    match std::fs::canonicalize(path) {
        Ok(root) if root.is_dir() => Ok(root),
        _ => Err(CliError::InvalidRoot {
            path: path.to_path_buf(),
        }),
    }
}

/// `--format`, then `--output-format json`, then `output.format`.
pub(crate) fn resolve_format(
    flag: Option<TreeFormat>,
    global: &GlobalArgs,
    config: &AppConfig,
) -> TreeFormat {
    flag.unwrap_or(if global.output_format == OutputFormat::Json {
        TreeFormat::Json
    } else {
        config.output.format
    })
}
