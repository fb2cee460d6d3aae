use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tidemark_config::TidemarkConfig;

/// Name of the configuration file, resolved against the project root.
pub const CONFIG_FILE: &str = "tidemark.json";

fn config_path(project_root: Option<PathBuf>) -> PathBuf {
    match project_root {
        Some(root) => root.join(CONFIG_FILE),
        None => PathBuf::from(CONFIG_FILE),
    }
}

/// Read and parse the config file, `None` when it does not exist. Parse
/// failures are errors: a present-but-broken file should never be silently
/// papered over with defaults.
fn read_config(path: &Path) -> Result<Option<TidemarkConfig>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("read {}", path.display()));
        }
    };
    let config = serde_json::from_str(&content)
        .with_context(|| format!("parse {}", path.display()))?;
    Ok(Some(config))
}

/// Load tidemark.json config from current directory.
pub fn load_config() -> Result<TidemarkConfig> {
    read_config(Path::new(CONFIG_FILE))?
        .with_context(|| format!("{CONFIG_FILE} not found. Run 'tidemark init' first."))
}

/// Load config from a specific path.
pub fn load_config_from_path(path: PathBuf) -> Result<TidemarkConfig> {
    read_config(&path)?.with_context(|| format!("{CONFIG_FILE} not found at: {}", path.display()))
}

/// Load config from project root, with fallback to defaults.
pub fn load_config_or_default(project_root: Option<PathBuf>) -> Result<TidemarkConfig> {
    Ok(read_config(&config_path(project_root))?.unwrap_or_default())
}

/// Write a default config file into the project root, refusing to clobber
/// an existing one. Returns the path written.
pub fn write_default_config(project_root: Option<PathBuf>) -> Result<PathBuf> {
    let path = config_path(project_root);
    if path.exists() {
        anyhow::bail!("{CONFIG_FILE} already exists");
    }

    let json = serde_json::to_string_pretty(&TidemarkConfig::default())
        .context("serialize default config")?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn load_config_or_default_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config_or_default(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(config, TidemarkConfig::default());
    }

    #[test]
    fn load_config_or_default_reads_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            r#"{"migrationsDir": "db/migrations"}"#,
        )
        .unwrap();

        let config = load_config_or_default(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(config.migrations_dir(), Path::new("db/migrations"));
    }

    #[test]
    fn load_config_from_path_rejects_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_config_from_path(temp_dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn broken_config_is_an_error_not_a_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        let err = load_config_from_path(path).unwrap_err();
        assert!(err.to_string().contains("parse"));

        let err = load_config_or_default(Some(temp_dir.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn write_default_config_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_default_config(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(path, temp_dir.path().join(CONFIG_FILE));

        let config = load_config_from_path(path).unwrap();
        assert_eq!(config, TidemarkConfig::default());
    }

    #[test]
    fn write_default_config_refuses_to_clobber() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE), "{}").unwrap();

        let err = write_default_config(Some(temp_dir.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
