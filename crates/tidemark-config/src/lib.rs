pub mod config;
pub mod connect;

pub use config::{default_combined_filename, TidemarkConfig};
pub use connect::{ConnectOptions, SslMode};
