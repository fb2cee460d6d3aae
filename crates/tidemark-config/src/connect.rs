use std::time::Duration;

/// TLS requirement for the database connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SslMode {
    /// Never use TLS.
    Disable,
    /// Use TLS when the server supports it.
    Prefer,
    /// Require TLS, failing the connection otherwise.
    #[default]
    Require,
}

/// Connection parameters for the target database.
///
/// Passed explicitly into the executor; there is no process-wide
/// configuration. The engine only ever sees an open connection built from
/// these, and how the password was obtained is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct ConnectOptions {
    /// Database server host name.
    #[cfg_attr(feature = "cli", arg(long))]
    pub host: String,

    /// Database server port.
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 5432))]
    pub port: u16,

    /// Role to authenticate as.
    #[cfg_attr(feature = "cli", arg(long, default_value = "postgres"))]
    pub user: String,

    /// Password for the role. When omitted the caller resolves it from the
    /// environment or an interactive prompt.
    #[cfg_attr(feature = "cli", arg(long))]
    pub password: Option<String>,

    /// Database name to run migrations against.
    #[cfg_attr(feature = "cli", arg(long, default_value = "postgres"))]
    pub database: String,

    /// TLS requirement for the connection.
    #[cfg_attr(feature = "cli", arg(long, value_enum, default_value = "require"))]
    pub ssl_mode: SslMode,

    /// Seconds to wait for the connection to be established.
    #[cfg_attr(
        feature = "cli",
        arg(long = "connect-timeout", default_value_t = 30)
    )]
    pub connect_timeout_secs: u64,
}

impl ConnectOptions {
    /// Options for `host` with the standard Postgres defaults.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 5432,
            user: "postgres".to_string(),
            password: None,
            database: "postgres".to_string(),
            ssl_mode: SslMode::default(),
            connect_timeout_secs: 30,
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
