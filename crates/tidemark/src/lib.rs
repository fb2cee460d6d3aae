//! Ordered, fail-fast application of numbered SQL migration scripts.
//!
//! Discover `NNN_name.sql` scripts with [`discover_scripts`], or split a
//! combined document into units with [`split_combined`], then apply them in
//! sequence order through an [`Engine`] over a [`PgExecutor`].

// Re-export the commonly used surface of the member crates.
#[doc(inline)]
pub use tidemark_core::{
    parse_unit_file_name, RunReport, ScriptUnit, UnitNameError, UnitOutcome, UnitStatus,
};

#[doc(inline)]
pub use tidemark_config::{ConnectOptions, SslMode, TidemarkConfig};

#[doc(inline)]
pub use tidemark_loader::{
    discover_scripts, discover_scripts_in, load_config_or_default, load_script, split_combined,
    write_units, SplitError, StoreError,
};

#[doc(inline)]
pub use tidemark_engine::{Engine, EngineError, PgExecutor, ScriptError, ScriptExecutor};
