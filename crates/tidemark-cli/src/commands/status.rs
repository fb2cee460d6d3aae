use std::fs;

use anyhow::Result;
use colored::Colorize;
use tidemark_loader::{discover_scripts, load_config_or_default, StoreError};

pub fn cmd_status() -> Result<()> {
    let config = load_config_or_default(None)?;

    println!(
        "{} {}",
        "Migrations directory:".bright_cyan(),
        config.migrations_dir().display().to_string().bright_white()
    );

    match discover_scripts(&config) {
        Ok(scripts) => {
            println!(
                "{} {}",
                "Discovered scripts:".bright_cyan(),
                scripts.len().to_string().bright_yellow()
            );
            for script in &scripts {
                let size_kb = fs::metadata(&script.path)
                    .map(|m| m.len() as f64 / 1024.0)
                    .unwrap_or(0.0);
                println!("  {} ({:.1} KB)", script.file_name().bright_white(), size_kb);
            }
        }
        Err(StoreError::DirectoryNotFound(_) | StoreError::NoScripts(_)) => {
            println!(
                "{}",
                "No migration scripts found. Run 'tidemark split' or add NNN_name.sql files."
                    .bright_yellow()
            );
        }
        Err(err) => return Err(err.into()),
    }

    if config.combined_path().is_file() {
        println!(
            "{} {}",
            "Combined document:".bright_cyan(),
            config.combined_path().display().to_string().bright_white()
        );
    }
    Ok(())
}
