//! Workspace scanning settings.

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Maximum number of file reads in flight during one population.
pub const DEFAULT_SCAN_CONCURRENCY: usize = 2;

/// Default include globs (TypeScript / JavaScript sources).
pub const DEFAULT_INCLUDE: &[&str] = &["**/*.{ts,tsx,js,jsx}"];

/// Default exclude globs (dependencies and build output).
pub const DEFAULT_EXCLUDE: &[&str] = &[
    "**/node_modules/**",
    "**/.next/**",
    "**/dist/**",
    "**/out/**",
    "**/build/**",
    "**/.git/**",
];

/// Default watch categories for the files tree.
pub const DEFAULT_WATCH: &[&str] = &[
    "components",
    "hooks",
    "layouts",
    "pages",
    "routers",
    "services",
    "utils",
];

/// How a workspace is enumerated and scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSettings {
    /// Globs a file must match to be listed.
    pub include: Vec<String>,
    /// Globs that remove a file from the listing.
    pub exclude: Vec<String>,
    /// Ordered watch categories for the files tree.
    pub watch: Vec<String>,
    /// Label files with their workspace-relative path instead of the name.
    pub show_path: bool,
    /// Concurrent file reads while scanning.
    pub scan_concurrency: usize,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            include: to_owned(DEFAULT_INCLUDE),
            exclude: to_owned(DEFAULT_EXCLUDE),
            watch: to_owned(DEFAULT_WATCH),
            show_path: true,
            scan_concurrency: DEFAULT_SCAN_CONCURRENCY,
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl WorkspaceSettings {
    pub fn with_watch<I, S>(mut self, watch: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.watch = watch.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_scan_concurrency(mut self, limit: usize) -> Self {
        self.scan_concurrency = limit;
        self
    }

    pub fn with_show_path(mut self, show_path: bool) -> Self {
        self.show_path = show_path;
        self
    }

    /// Check invariants that cannot be expressed in the type.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.scan_concurrency == 0 {
            return Err(DomainError::InvalidConcurrency(self.scan_concurrency));
        }
        if self.watch.iter().any(|c| c.trim().is_empty()) {
            return Err(DomainError::EmptyCategory);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = WorkspaceSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.scan_concurrency, 2);
        assert_eq!(settings.watch.first().map(String::as_str), Some("components"));
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let settings = WorkspaceSettings::default().with_scan_concurrency(0);
        assert_eq!(settings.validate(), Err(DomainError::InvalidConcurrency(0)));
    }

    #[test]
    fn blank_category_is_rejected() {
        let settings = WorkspaceSettings::default().with_watch(["pages", " "]);
        assert_eq!(settings.validate(), Err(DomainError::EmptyCategory));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let settings: WorkspaceSettings =
            serde_json::from_str(r#"{ "watch": ["pages"], "show_path": false }"#).unwrap();
        assert_eq!(settings.watch, vec!["pages".to_string()]);
        assert!(!settings.show_path);
        assert_eq!(settings.scan_concurrency, DEFAULT_SCAN_CONCURRENCY);
    }
}
