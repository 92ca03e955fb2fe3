//! Configuration system
//!
//! Loads ~/.config/paxfinder/config.yaml with support for:
//! - Where the state database lives and which key holds the records
//! - Terminal display preferences

mod paxfinder_config;
pub mod validation;

pub use paxfinder_config::{config_dir, DisplayConfig, PaxfinderConfig, StorageConfig};
pub use validation::{validate_config, validate_config_result, ValidationError};
