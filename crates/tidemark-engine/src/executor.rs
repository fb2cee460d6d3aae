use thiserror::Error;

/// Failure of one script execution, carrying the database error text.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ScriptError {
    pub message: String,
}

impl ScriptError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Capability the engine requires from a database connection: execute one
/// script's text, committing its effects before returning, and report
/// success or a typed failure. Nothing product-specific beyond that.
pub trait ScriptExecutor {
    async fn execute_script(&mut self, script: &str) -> Result<(), ScriptError>;
}
