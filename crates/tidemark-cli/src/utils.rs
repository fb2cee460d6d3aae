use std::env;

use anyhow::{Context, Result};
use colored::Colorize;
use tidemark_config::ConnectOptions;
use tidemark_core::{RunReport, ScriptUnit, UnitStatus};
use tidemark_engine::{Engine, EngineError, PgExecutor};

/// Environment variable checked before prompting for the password.
pub const PASSWORD_ENV: &str = "TIDEMARK_DB_PASSWORD";

/// Resolve the database password: `--password` flag, then the environment,
/// then an interactive prompt. An empty password is rejected.
pub fn resolve_password(flag: Option<String>) -> Result<String> {
    let password = match flag {
        Some(password) => password,
        None => match env::var(PASSWORD_ENV) {
            Ok(password) => password,
            Err(_) => dialoguer::Password::new()
                .with_prompt("Database password")
                .interact()
                .context("read password")?,
        },
    };
    if password.is_empty() {
        anyhow::bail!("password cannot be empty");
    }
    Ok(password)
}

/// Connect, run every unit in order, release the connection on every exit
/// path, and print the per-unit report.
pub async fn apply_units(mut options: ConnectOptions, units: Vec<ScriptUnit>) -> Result<()> {
    options.password = Some(resolve_password(options.password.take())?);

    println!(
        "{} {}",
        "Connecting to".bright_cyan(),
        format!("{}:{}", options.host, options.port).bright_white()
    );
    let executor = PgExecutor::connect(&options).await?;
    println!("{}", "Connected".bright_green());

    let mut engine = Engine::new(executor);
    let result = engine.run(units).await;
    if let Err(err) = engine.into_inner().close().await {
        tracing::warn!(error = %err, "closing database connection failed");
    }

    match result {
        Ok(report) => {
            print_report(&report);
            println!(
                "\n{}",
                format!("All {} migrations applied", report.applied())
                    .bright_green()
                    .bold()
            );
            Ok(())
        }
        Err(err) => {
            if let EngineError::Execution { report, .. } = &err {
                print_report(report);
            }
            Err(err.into())
        }
    }
}

/// Print one line per unit outcome.
pub fn print_report(report: &RunReport) {
    for outcome in &report.outcomes {
        let label = format!("{:03}_{}", outcome.sequence, outcome.name);
        match &outcome.status {
            UnitStatus::Ok => {
                println!("{} {}", label.bright_white(), "OK".bright_green());
            }
            UnitStatus::Failed { cause } => {
                println!(
                    "{} {}\n  {}",
                    label.bright_white(),
                    "FAILED".bright_red().bold(),
                    cause.bright_red()
                );
            }
        }
    }
}
