use crate::error::{MigrateError, Result};
use crate::rules::builtin::{default_passes, find_builtin};
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration from a `.theme-migrate.toml` file.
///
/// Every key is optional; missing keys fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
	/// Directory searched recursively for candidate files.
	pub root: PathBuf,

	/// File extensions to migrate, without the leading dot.
	pub extensions: Vec<String>,

	/// Paths or glob patterns excluded regardless of extension.
	pub skip: Vec<String>,

	/// Builtin rule sets to run, in order.
	pub passes: Vec<String>,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			root: PathBuf::from("src"),
			extensions: vec!["tsx".to_string(), "ts".to_string()],
			skip: vec![
				"src/app/globals.css".to_string(),
				"tailwind.config.ts".to_string(),
			],
			passes: default_passes(),
		}
	}
}

impl Config {
	/// Check extensions and pass names.
	pub fn validate(&self) -> Result<()> {
		if self.extensions.is_empty() {
			return Err(MigrateError::InvalidConfig {
				key: "extensions".to_string(),
				reason: "at least one extension is required".to_string(),
			});
		}

		for ext in &self.extensions {
			if ext.is_empty() || ext.starts_with('.') {
				return Err(MigrateError::InvalidConfig {
					key: "extensions".to_string(),
					reason: format!("{ext:?} must be non-empty and have no leading dot"),
				});
			}
		}

		if self.passes.is_empty() {
			return Err(MigrateError::InvalidConfig {
				key: "passes".to_string(),
				reason: "at least one pass is required".to_string(),
			});
		}

		for pass in &self.passes {
			if find_builtin(pass).is_none() {
				return Err(MigrateError::UnknownRuleSet { name: pass.clone() });
			}
		}

		Ok(())
	}
}

/// A configuration with the file it was loaded from, if any.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// Source file; `None` when running on defaults.
	pub path: Option<PathBuf>,
}
