use tidemark_core::{RunReport, ScriptUnit, UnitOutcome};

use crate::error::EngineError;
use crate::executor::ScriptExecutor;

/// Applies units against one connection, strictly in ascending sequence
/// order, one at a time, stopping at the first failure.
///
/// Each unit is auto-committed by the executor, so an already-applied unit
/// stays applied even when a later one fails. The engine performs no retries
/// and no cross-unit rollback; units are expected to carry their own guards
/// (`IF NOT EXISTS` idioms) so a re-run after a partial failure is safe.
pub struct Engine<E> {
    executor: E,
}

impl<E: ScriptExecutor> Engine<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Hand the executor back so the caller can release the connection on
    /// every exit path.
    pub fn into_inner(self) -> E {
        self.executor
    }

    /// Apply every unit in ascending sequence order.
    ///
    /// Duplicate sequence numbers are rejected before anything executes.
    /// On a unit failure the run aborts immediately; the returned error
    /// names the failing sequence and carries the report of everything that
    /// ran before it.
    pub async fn run(&mut self, mut units: Vec<ScriptUnit>) -> Result<RunReport, EngineError> {
        units.sort_by_key(|u| u.sequence);
        for pair in units.windows(2) {
            if pair[0].sequence == pair[1].sequence {
                return Err(EngineError::DuplicateSequence(pair[0].sequence));
            }
        }

        let mut report = RunReport::default();
        let total = units.len();
        for (i, unit) in units.iter().enumerate() {
            tracing::info!(
                sequence = unit.sequence,
                name = %unit.name,
                step = i + 1,
                total,
                "applying migration"
            );
            match self.executor.execute_script(&unit.body).await {
                Ok(()) => {
                    report
                        .outcomes
                        .push(UnitOutcome::ok(unit.sequence, unit.name.clone()));
                }
                Err(cause) => {
                    tracing::error!(
                        sequence = unit.sequence,
                        name = %unit.name,
                        error = %cause,
                        "migration failed, aborting run"
                    );
                    report.outcomes.push(UnitOutcome::failed(
                        unit.sequence,
                        unit.name.clone(),
                        cause.message.clone(),
                    ));
                    return Err(EngineError::Execution {
                        sequence: unit.sequence,
                        name: unit.name.clone(),
                        cause,
                        report,
                    });
                }
            }
        }
        Ok(report)
    }
}
