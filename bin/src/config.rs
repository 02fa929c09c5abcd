//! CLI configuration from the environment.

use std::path::PathBuf;

/// Environment variable naming the default report directory.
pub(crate) const OUTPUT_DIR_VAR: &str = "CAPVAL_OUTPUT_DIR";

/// Settings that can come from the environment or a `.env` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CliConfig {
    /// Directory reports are written to when no explicit path is given
    pub(crate) output_dir: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl CliConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub(crate) fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = lookup(OUTPUT_DIR_VAR).filter(|dir| !dir.trim().is_empty()) {
            config.output_dir = PathBuf::from(dir);
        }
        config
    }
}
