use std::path::PathBuf;

use thiserror::Error;
use tidemark_core::UnitNameError;

/// Failures while discovering or reading migration scripts. All of these are
/// raised before any database connection is attempted.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("migrations directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("no migration scripts found in {}", .0.display())]
    NoScripts(PathBuf),
    #[error("migration script not found: {}", .0.display())]
    ScriptNotFound(PathBuf),
    #[error(transparent)]
    InvalidName(#[from] UnitNameError),
    #[error("read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while splitting a combined migration document.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("no migration markers found in combined document")]
    EmptyInput,
    #[error("write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
