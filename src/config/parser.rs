use crate::config::types::{Config, LoadedConfig};
use crate::error::{MigrateError, Result};
use std::path::Path;

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".theme-migrate.toml";

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content =
		std::fs::read_to_string(path).map_err(|source| MigrateError::ConfigReadError {
			path: path.to_path_buf(),
			source,
		})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	let config: Config =
		toml::from_str(content).map_err(|source| MigrateError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	config.validate()?;

	Ok(config)
}

/// Load the effective config.
///
/// An explicit path must exist. Otherwise `.theme-migrate.toml` in `cwd` is
/// used when present, and the defaults when not.
pub fn load_config(cwd: &Path, explicit: Option<&Path>) -> Result<LoadedConfig> {
	let path = match explicit {
		Some(path) => path.to_path_buf(),
		None => {
			let candidate = cwd.join(CONFIG_FILE_NAME);
			if !candidate.exists() {
				tracing::debug!(cwd = %cwd.display(), "no config file, using defaults");
				return Ok(LoadedConfig {
					config: Config::default(),
					path: None,
				});
			}
			candidate
		}
	};

	let config = parse_config_file(&path)?;
	tracing::debug!(path = %path.display(), "loaded config");
	Ok(LoadedConfig {
		config,
		path: Some(path),
	})
}

/// Template written by `--init`.
pub fn generate_init_template() -> String {
	let defaults = Config::default();
	let quote = |items: &[String]| {
		items
			.iter()
			.map(|item| format!("{item:?}"))
			.collect::<Vec<_>>()
			.join(", ")
	};

	format!(
		r#"# theme-migrate configuration

# Directory searched recursively for candidate files
root = {root:?}

# Extensions to migrate (no leading dot)
extensions = [{extensions}]

# Paths or glob patterns that are never touched
skip = [{skip}]

# Builtin rule sets, run in order (see `theme-migrate rules list`)
passes = [{passes}]
"#,
		root = defaults.root.display().to_string(),
		extensions = quote(&defaults.extensions),
		skip = quote(&defaults.skip),
		passes = quote(&defaults.passes),
	)
}
