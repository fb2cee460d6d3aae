pub mod engine;
pub mod error;
pub mod executor;
pub mod postgres;

pub use engine::Engine;
pub use error::EngineError;
pub use executor::{ScriptError, ScriptExecutor};
pub use postgres::PgExecutor;
