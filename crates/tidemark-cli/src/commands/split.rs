use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use tidemark_loader::{load_config_or_default, split_combined, write_units, StoreError};

pub fn cmd_split(file: Option<PathBuf>) -> Result<()> {
    let config = load_config_or_default(None)?;
    let path = file.unwrap_or_else(|| config.combined_path());
    if !path.is_file() {
        return Err(StoreError::ScriptNotFound(path).into());
    }

    let text = fs::read_to_string(&path)
        .with_context(|| format!("read combined document: {}", path.display()))?;
    let units = split_combined(&text, config.script_extension())?;

    fs::create_dir_all(config.migrations_dir()).context("create migrations directory")?;
    let written = write_units(config.migrations_dir(), &units, config.script_extension())?;

    for (unit, path) in units.iter().zip(&written) {
        let size_kb = unit.body.len() as f64 / 1024.0;
        println!(
            "{} {} ({:.1} KB)",
            "wrote".bright_green(),
            path.display().to_string().bright_white(),
            size_kb
        );
    }
    println!(
        "\n{}",
        format!("Split into {} migration scripts", written.len())
            .bright_green()
            .bold()
    );
    Ok(())
}
