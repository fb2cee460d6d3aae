use thiserror::Error;
use tidemark_core::RunReport;

use crate::executor::ScriptError;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The database connection could not be established (bad credentials,
    /// network, timeout). Raised before any unit executes.
    #[error("could not connect to database: {0}")]
    Connection(String),

    /// Two units in the same run share a sequence number. Rejected before
    /// any unit executes.
    #[error("duplicate sequence number {0:03} in migration set")]
    DuplicateSequence(u32),

    /// One unit's script failed. Units applied before it stay committed;
    /// the report records exactly how far the run got so the operator can
    /// fix the script and re-run from it.
    #[error("migration {sequence:03}_{name} failed: {cause}")]
    Execution {
        sequence: u32,
        name: String,
        #[source]
        cause: ScriptError,
        report: RunReport,
    },
}
