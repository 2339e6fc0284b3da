//! Include/exclude glob matching on workspace-relative paths.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use stackview_core::{domain::DomainError, error::StackviewResult};

/// Compiled include/exclude globs.
///
/// Globs are matched against the path relative to the workspace root with
/// `/` separators; `*` never crosses a directory boundary.
#[derive(Debug, Clone)]
pub struct PathFilter {
    include: GlobSet,
    exclude: GlobSet,
}

impl PathFilter {
    pub fn new(include: &[String], exclude: &[String]) -> StackviewResult<Self> {
        Ok(Self {
            include: build_set(include)?,
            exclude: build_set(exclude)?,
        })
    }

    /// Whether a workspace-relative path is listed.
    pub fn is_match(&self, relative: &Path) -> bool {
        self.include.is_match(relative) && !self.exclude.is_match(relative)
    }

    /// Whether a relative directory is pruned from the walk.
    pub fn is_excluded_dir(&self, relative: &Path) -> bool {
        // `**/dist/**` only matches paths below `dist`, so probe with a child.
        self.exclude.is_match(relative.join("_"))
    }
}

fn build_set(globs: &[String]) -> StackviewResult<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for glob in globs {
        let compiled = GlobBuilder::new(glob)
            .literal_separator(true)
            .build()
            .map_err(|e| DomainError::InvalidGlob {
                glob: glob.clone(),
                reason: e.kind().to_string(),
            })?;
        builder.add(compiled);
    }
    builder.build().map_err(|e| {
        DomainError::InvalidGlob {
            glob: globs.join(", "),
            reason: e.to_string(),
        }
        .into()
    })
}

/// `path` relative to `root`, or `None` if it lies outside.
pub fn relative_to(root: &Path, path: &Path) -> Option<PathBuf> {
    path.strip_prefix(root).ok().map(Path::to_path_buf)
}
