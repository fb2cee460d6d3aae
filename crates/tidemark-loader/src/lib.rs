pub mod config;
pub mod error;
pub mod splitter;
pub mod store;

pub use config::{
    load_config, load_config_from_path, load_config_or_default, write_default_config, CONFIG_FILE,
};
pub use error::{SplitError, StoreError};
pub use splitter::{parse_marker, split_combined, write_units, MARKER_PREFIX};
pub use store::{discover_scripts, discover_scripts_in, load_script, StoredScript};
