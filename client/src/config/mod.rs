mod config;

pub use config::{get_config_manager, get_config_path};
