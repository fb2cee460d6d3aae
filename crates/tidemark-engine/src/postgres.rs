use sqlx::postgres::{PgConnectOptions, PgSslMode};
use sqlx::{Connection, PgConnection};
use tidemark_config::{ConnectOptions, SslMode};

use crate::error::EngineError;
use crate::executor::{ScriptError, ScriptExecutor};

/// Script executor backed by a single Postgres connection.
///
/// One connection serves the whole run. Scripts go through the simple query
/// protocol, so multi-statement bodies execute and commit as one batch per
/// unit. No transaction spans units.
pub struct PgExecutor {
    conn: PgConnection,
}

impl PgExecutor {
    /// Open a connection, enforcing the configured connect timeout.
    pub async fn connect(options: &ConnectOptions) -> Result<Self, EngineError> {
        let pg = pg_options(options);
        let connecting = PgConnection::connect_with(&pg);
        let conn = tokio::time::timeout(options.connect_timeout(), connecting)
            .await
            .map_err(|_| {
                EngineError::Connection(format!(
                    "timed out after {}s connecting to {}:{}",
                    options.connect_timeout_secs, options.host, options.port
                ))
            })?
            .map_err(|e| EngineError::Connection(e.to_string()))?;
        tracing::debug!(host = %options.host, database = %options.database, "connected");
        Ok(Self { conn })
    }

    /// Close the connection gracefully. Dropping the executor releases the
    /// connection too; this just says goodbye to the server first.
    pub async fn close(self) -> Result<(), EngineError> {
        self.conn
            .close()
            .await
            .map_err(|e| EngineError::Connection(e.to_string()))
    }
}

impl ScriptExecutor for PgExecutor {
    async fn execute_script(&mut self, script: &str) -> Result<(), ScriptError> {
        sqlx::raw_sql(script)
            .execute(&mut self.conn)
            .await
            .map(|_| ())
            .map_err(|e| ScriptError::new(e.to_string()))
    }
}

fn pg_options(options: &ConnectOptions) -> PgConnectOptions {
    let mut pg = PgConnectOptions::new()
        .host(&options.host)
        .port(options.port)
        .username(&options.user)
        .database(&options.database)
        .ssl_mode(pg_ssl_mode(options.ssl_mode));
    if let Some(password) = options.password.as_deref() {
        pg = pg.password(password);
    }
    pg
}

fn pg_ssl_mode(mode: SslMode) -> PgSslMode {
    match mode {
        SslMode::Disable => PgSslMode::Disable,
        SslMode::Prefer => PgSslMode::Prefer,
        SslMode::Require => PgSslMode::Require,
    }
}
