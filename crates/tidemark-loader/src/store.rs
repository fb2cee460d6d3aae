use std::fs;
use std::path::{Path, PathBuf};

use tidemark_config::TidemarkConfig;
use tidemark_core::{parse_unit_file_name, ScriptUnit};

use crate::error::StoreError;

/// A discovered migration script, not yet read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredScript {
    pub sequence: u32,
    pub name: String,
    pub path: PathBuf,
}

impl StoredScript {
    /// File name as it appears on disk.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Read the script body and build the unit. The body is the full file
    /// contents, byte-exact; migrations may be whitespace-sensitive SQL.
    pub fn load(&self) -> Result<ScriptUnit, StoreError> {
        let body = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(ScriptUnit::new(self.sequence, self.name.clone(), body))
    }
}

/// Discover migration scripts in the configured migrations directory.
pub fn discover_scripts(config: &TidemarkConfig) -> Result<Vec<StoredScript>, StoreError> {
    discover_scripts_in(config.migrations_dir(), config)
}

/// Discover migration scripts in `dir`, sorted ascending by sequence.
///
/// Matches `NNN_name.<ext>` file names, skipping the combined document and
/// anything else. Fails when the directory is missing or nothing matches.
pub fn discover_scripts_in(
    dir: &Path,
    config: &TidemarkConfig,
) -> Result<Vec<StoredScript>, StoreError> {
    if !dir.is_dir() {
        return Err(StoreError::DirectoryNotFound(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut scripts = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if file_name == config.combined_filename() {
            continue;
        }
        let Ok((sequence, name, extension)) = parse_unit_file_name(file_name) else {
            continue;
        };
        if extension != config.script_extension() {
            continue;
        }
        scripts.push(StoredScript {
            sequence,
            name,
            path,
        });
    }

    if scripts.is_empty() {
        return Err(StoreError::NoScripts(dir.to_path_buf()));
    }

    scripts.sort_by_key(|s| s.sequence);
    tracing::debug!(dir = %dir.display(), count = scripts.len(), "discovered migration scripts");
    Ok(scripts)
}

/// Load a single named migration script.
pub fn load_script(path: &Path) -> Result<ScriptUnit, StoreError> {
    if !path.is_file() {
        return Err(StoreError::ScriptNotFound(path.to_path_buf()));
    }
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| StoreError::ScriptNotFound(path.to_path_buf()))?;
    let (sequence, name, _extension) = parse_unit_file_name(file_name)?;

    let body = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ScriptUnit::new(sequence, name, body))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn config() -> TidemarkConfig {
        TidemarkConfig::default()
    }

    #[test]
    fn missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("migrations");

        let err = discover_scripts_in(&missing, &config()).unwrap_err();
        assert!(matches!(err, StoreError::DirectoryNotFound(_)));
    }

    #[test]
    fn directory_without_matching_scripts_fails() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "not a migration").unwrap();
        fs::write(temp_dir.path().join("12_too_short.sql"), "SELECT 1;").unwrap();

        let err = discover_scripts_in(temp_dir.path(), &config()).unwrap_err();
        assert!(matches!(err, StoreError::NoScripts(_)));
    }

    #[test]
    fn discovers_sorted_and_skips_combined_document() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("003_third.sql"), "c").unwrap();
        fs::write(dir.join("001_first.sql"), "a").unwrap();
        fs::write(dir.join("002_second.sql"), "b").unwrap();
        fs::write(dir.join("COMBINED_ALL_MIGRATIONS.sql"), "-- everything").unwrap();
        fs::write(dir.join("README.md"), "docs").unwrap();

        let scripts = discover_scripts_in(dir, &config()).unwrap();
        let sequences: Vec<u32> = scripts.iter().map(|s| s.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
        assert!(scripts.iter().all(|s| s.file_name() != "COMBINED_ALL_MIGRATIONS.sql"));

        // Zero-padded prefixes keep lexical file-name order in agreement
        // with the numeric sort.
        let mut names: Vec<String> = scripts.iter().map(|s| s.file_name()).collect();
        let sorted = names.clone();
        names.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn respects_configured_extension() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("001_first.sql"), "a").unwrap();
        fs::write(dir.join("002_second.ddl"), "b").unwrap();

        let scripts = discover_scripts_in(dir, &config()).unwrap();
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0].name, "first");
    }

    #[test]
    fn load_preserves_body_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let body = "-- header\r\nCREATE TABLE t (id int);\n\n  -- trailing  \n";
        fs::write(dir.join("001_exact.sql"), body).unwrap();

        let scripts = discover_scripts_in(dir, &config()).unwrap();
        let unit = scripts[0].load().unwrap();
        assert_eq!(unit.body, body);
    }

    #[test]
    fn load_script_reads_one_named_unit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("007_add_buckets.sql");
        fs::write(&path, "SELECT 7;").unwrap();

        let unit = load_script(&path).unwrap();
        assert_eq!(unit.sequence, 7);
        assert_eq!(unit.name, "add_buckets");
        assert_eq!(unit.body, "SELECT 7;");
    }

    #[test]
    fn load_script_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_script(&temp_dir.path().join("001_missing.sql")).unwrap_err();
        assert!(matches!(err, StoreError::ScriptNotFound(_)));
    }

    #[test]
    fn load_script_rejects_unnumbered_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("setup.sql");
        fs::write(&path, "SELECT 1;").unwrap();

        let err = load_script(&path).unwrap_err();
        assert!(matches!(err, StoreError::InvalidName(_)));
    }
}
