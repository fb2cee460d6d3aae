use anyhow::Result;
use colored::Colorize;
use tidemark_loader::write_default_config;

pub fn cmd_init() -> Result<()> {
    let path = write_default_config(None)?;
    println!(
        "{} {}",
        "created".bright_green(),
        path.display().to_string().bright_white()
    );
    Ok(())
}
