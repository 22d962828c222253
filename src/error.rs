use std::path::PathBuf;

/// Library-level structured errors for theme-migrate.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
	#[error("Failed to read file: {path}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("File is not valid UTF-8 text: {path}")]
	InvalidUtf8 {
		path: PathBuf,
		#[source]
		source: std::string::FromUtf8Error,
	},

	#[error("Failed to write file: {path}")]
	FileWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid config value for {key}: {reason}")]
	InvalidConfig { key: String, reason: String },

	#[error("Rule set {rule_set} contains a rule with an empty pattern")]
	EmptyPattern { rule_set: String },

	#[error("Rule set {rule_set} contains duplicate pattern: {pattern}")]
	DuplicatePattern { rule_set: String, pattern: String },

	#[error(
		"Rule set {rule_set}: replacement {replacement:?} (for {source_pattern:?}) contains pattern {pattern:?}"
	)]
	SelfFeedingRule {
		rule_set: String,
		source_pattern: String,
		replacement: String,
		pattern: String,
	},

	#[error(
		"Pass {later} would re-match output of pass {earlier}: replacement {replacement:?} contains pattern {pattern:?}"
	)]
	CrossPassOverlap {
		earlier: String,
		later: String,
		replacement: String,
		pattern: String,
	},

	#[error("Unknown rule set: {name}")]
	UnknownRuleSet { name: String },

	#[error("Invalid glob pattern: {pattern}")]
	InvalidGlob {
		pattern: String,
		#[source]
		source: glob::PatternError,
	},

	#[error("Source root is not a directory: {path}")]
	RootNotFound { path: PathBuf },
}

/// Result type alias using MigrateError.
pub type Result<T> = std::result::Result<T, MigrateError>;
