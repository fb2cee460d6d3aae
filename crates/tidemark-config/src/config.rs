use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_migrations_dir() -> PathBuf {
    PathBuf::from("migrations")
}

/// Reserved name of the combined migration document. Excluded from directory
/// discovery; input to the splitter only.
pub fn default_combined_filename() -> String {
    "COMBINED_ALL_MIGRATIONS.sql".to_string()
}

fn default_script_extension() -> String {
    "sql".to_string()
}

/// Top-level tidemark configuration, loaded from `tidemark.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TidemarkConfig {
    /// Directory holding the numbered migration scripts.
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: PathBuf,
    /// File embedding every migration behind marker lines.
    #[serde(default = "default_combined_filename")]
    pub combined_filename: String,
    /// Extension of migration scripts (without the dot).
    #[serde(default = "default_script_extension")]
    pub script_extension: String,
}

impl Default for TidemarkConfig {
    fn default() -> Self {
        Self {
            migrations_dir: default_migrations_dir(),
            combined_filename: default_combined_filename(),
            script_extension: default_script_extension(),
        }
    }
}

impl TidemarkConfig {
    /// Path where migration scripts are stored.
    pub fn migrations_dir(&self) -> &Path {
        &self.migrations_dir
    }

    /// Reserved file name of the combined migration document.
    pub fn combined_filename(&self) -> &str {
        &self.combined_filename
    }

    /// Extension of migration scripts (without the dot).
    pub fn script_extension(&self) -> &str {
        &self.script_extension
    }

    /// Full path of the combined document inside the migrations directory.
    pub fn combined_path(&self) -> PathBuf {
        self.migrations_dir.join(&self.combined_filename)
    }
}
