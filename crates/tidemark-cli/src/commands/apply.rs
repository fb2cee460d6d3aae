use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use tidemark_config::ConnectOptions;
use tidemark_loader::load_script;

use crate::utils::apply_units;

pub async fn cmd_apply(file: PathBuf, connect: ConnectOptions) -> Result<()> {
    let unit = load_script(&file)?;

    println!(
        "{} {}",
        "Applying".bright_cyan(),
        file.display().to_string().bright_white()
    );

    apply_units(connect, vec![unit]).await
}
