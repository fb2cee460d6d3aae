pub mod report;
pub mod unit;

pub use report::{RunReport, UnitOutcome, UnitStatus};
pub use unit::{parse_unit_file_name, ScriptUnit, UnitNameError, SEQUENCE_WIDTH};
