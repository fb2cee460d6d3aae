use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use tidemark_config::ConnectOptions;
use tidemark_loader::{discover_scripts_in, load_config_or_default};

use crate::utils::apply_units;

pub async fn cmd_run(dir: Option<PathBuf>, connect: ConnectOptions) -> Result<()> {
    let config = load_config_or_default(None)?;
    let dir = dir.unwrap_or_else(|| config.migrations_dir().to_path_buf());
    let scripts = discover_scripts_in(&dir, &config)?;

    println!(
        "{} {}",
        "Found".bright_cyan(),
        format!("{} migration scripts", scripts.len()).bright_white()
    );

    let units = scripts
        .iter()
        .map(|s| s.load())
        .collect::<Result<Vec<_>, _>>()?;

    apply_units(connect, units).await
}
