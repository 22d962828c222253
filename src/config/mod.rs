//! Configuration loading and parsing for theme-migrate.
//!
//! This module handles:
//! - TOML config file parsing and validation
//! - Default discovery settings and passes
//! - The `--init` template

pub mod parser;
pub mod types;

pub use parser::{
	CONFIG_FILE_NAME, generate_init_template, load_config, parse_config_file, parse_config_str,
};
pub use types::{Config, LoadedConfig};
