//! File migration driver.
//!
//! This module handles:
//! - Reading a file, running the engine and writing it back only if changed
//! - Running a sequence of passes (rule sets) over a list of files
//! - Collecting per-pass results for reporting

pub mod atomic;

use crate::error::{MigrateError, Result};
use crate::rules::{RuleSet, apply};
use std::path::{Path, PathBuf};

pub use atomic::write_atomic;

/// Driver behavior switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct MigrateOptions {
	/// Compute changes without writing anything.
	pub dry_run: bool,
}

/// Outcome of one rule set over a list of files.
#[derive(Debug, Default)]
pub struct PassReport {
	/// Rule set name.
	pub pass: String,

	/// Number of candidate files.
	pub total: usize,

	/// Files this pass changed (or would change, in a dry run).
	pub changed: Vec<PathBuf>,
}

impl PassReport {
	pub fn changed_count(&self) -> usize {
		self.changed.len()
	}
}

/// Outcome of running every pass over a list of files.
#[derive(Debug, Default)]
pub struct RunReport {
	/// One report per pass, in pass order.
	pub passes: Vec<PassReport>,

	/// Files that could not be read or written.
	pub failed: Vec<(PathBuf, MigrateError)>,
}

impl RunReport {
	pub fn changed_count(&self) -> usize {
		self.passes.iter().map(PassReport::changed_count).sum()
	}

	pub fn has_failures(&self) -> bool {
		!self.failed.is_empty()
	}
}

/// Read a file as UTF-8, in full.
pub fn read_document(path: &Path) -> Result<String> {
	let bytes = std::fs::read(path).map_err(|source| MigrateError::FileRead {
		path: path.to_path_buf(),
		source,
	})?;

	String::from_utf8(bytes).map_err(|source| MigrateError::InvalidUtf8 {
		path: path.to_path_buf(),
		source,
	})
}

/// Migrate a single file with `rule_set`.
///
/// The file is rewritten only when its content changes; an unchanged file is
/// not touched at all, so its modification time stays as it was. Returns the
/// changed flag.
pub fn migrate_file(path: &Path, rule_set: &RuleSet, options: MigrateOptions) -> Result<bool> {
	let flags = migrate_file_passes(path, std::slice::from_ref(rule_set), options)?;
	Ok(flags.contains(&true))
}

/// Migrate a single file with several rule sets, in order.
///
/// Each pass sees the output of the previous one in memory, so a dry run
/// reports the same per-pass flags as a real run. The file is written at most
/// once, after the last pass, and only if its content changed.
pub fn migrate_file_passes(
	path: &Path,
	rule_sets: &[RuleSet],
	options: MigrateOptions,
) -> Result<Vec<bool>> {
	let document = read_document(path)?;
	let mut text = document.clone();
	let mut flags = Vec::with_capacity(rule_sets.len());

	for rule_set in rule_sets {
		let result = apply(&text, rule_set);
		tracing::debug!(
			path = %path.display(),
			pass = rule_set.name(),
			changed = result.changed,
			"pass applied"
		);
		flags.push(result.changed);
		text = result.text;
	}

	if text != document && !options.dry_run {
		write_atomic(path, &text)?;
	}

	Ok(flags)
}

/// Run every rule set over every path.
///
/// Files are handled one at a time, each going through all passes before the
/// next file is read. A file that fails is recorded in the report and the run
/// moves on to the next file.
pub fn run_passes(paths: &[PathBuf], rule_sets: &[RuleSet], options: MigrateOptions) -> RunReport {
	let mut report = RunReport {
		passes: rule_sets
			.iter()
			.map(|rule_set| PassReport {
				pass: rule_set.name().to_string(),
				total: paths.len(),
				changed: Vec::new(),
			})
			.collect(),
		failed: Vec::new(),
	};

	for path in paths {
		match migrate_file_passes(path, rule_sets, options) {
			Ok(flags) => {
				for (pass, changed) in report.passes.iter_mut().zip(flags) {
					if changed {
						pass.changed.push(path.clone());
					}
				}
			}
			Err(e) => {
				tracing::warn!(path = %path.display(), error = %e, "file failed");
				report.failed.push((path.clone(), e));
			}
		}
	}

	for pass in &report.passes {
		tracing::info!(
			pass = %pass.pass,
			changed = pass.changed_count(),
			total = pass.total,
			dry_run = options.dry_run,
			"pass complete"
		);
	}

	report
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::builtin::{dark_luxury, residual};
	use std::fs;

	#[test]
	fn test_changed_file_is_rewritten_in_full() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("page.tsx");
		fs::write(&path, "bg-[#E6D4C7] text-[#273B3A]").unwrap();

		let changed = migrate_file(&path, &dark_luxury().unwrap(), MigrateOptions::default()).unwrap();

		assert!(changed);
		assert_eq!(
			fs::read_to_string(&path).unwrap(),
			"bg-[#0A0A0A] text-[#FAFAFA]"
		);
	}

	#[test]
	fn test_unchanged_file_is_not_written() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("page.tsx");
		fs::write(&path, "hello world").unwrap();
		let before = fs::metadata(&path).unwrap().modified().unwrap();

		std::thread::sleep(std::time::Duration::from_millis(20));
		let changed = migrate_file(&path, &dark_luxury().unwrap(), MigrateOptions::default()).unwrap();

		assert!(!changed);
		assert_eq!(fs::read_to_string(&path).unwrap(), "hello world");
		assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
	}

	#[test]
	fn test_dry_run_reports_without_writing() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("page.tsx");
		fs::write(&path, "bg-cream").unwrap();

		let changed =
			migrate_file(&path, &dark_luxury().unwrap(), MigrateOptions { dry_run: true }).unwrap();

		assert!(changed);
		assert_eq!(fs::read_to_string(&path).unwrap(), "bg-cream");
	}

	#[test]
	fn test_missing_file_is_read_error() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("missing.tsx");

		let result = migrate_file(&path, &dark_luxury().unwrap(), MigrateOptions::default());
		assert!(matches!(result.unwrap_err(), MigrateError::FileRead { .. }));
	}

	#[test]
	fn test_invalid_utf8_is_rejected_and_untouched() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("binary.ts");
		let bytes = b"bg-cream \xff\xfe";
		fs::write(&path, bytes).unwrap();

		let result = migrate_file(&path, &dark_luxury().unwrap(), MigrateOptions::default());
		assert!(matches!(
			result.unwrap_err(),
			MigrateError::InvalidUtf8 { .. }
		));
		assert_eq!(fs::read(&path).unwrap(), bytes);
	}

	#[test]
	fn test_run_continues_after_failure() {
		let temp_dir = tempfile::tempdir().unwrap();
		let a = temp_dir.path().join("a.tsx");
		let missing = temp_dir.path().join("b.tsx");
		let c = temp_dir.path().join("c.tsx");
		fs::write(&a, "bg-cream").unwrap();
		fs::write(&c, "text-cinnamon").unwrap();

		let paths = vec![a.clone(), missing.clone(), c.clone()];
		let report = run_passes(&paths, &[dark_luxury().unwrap()], MigrateOptions::default());

		assert_eq!(report.passes.len(), 1);
		assert_eq!(report.passes[0].pass, "dark-luxury");
		assert_eq!(report.passes[0].total, 3);
		assert_eq!(report.passes[0].changed, vec![a, c.clone()]);
		assert_eq!(report.failed.len(), 1);
		assert_eq!(report.failed[0].0, missing);
		assert_eq!(fs::read_to_string(&c).unwrap(), "text-[#CDB49E]");
	}

	#[test]
	fn test_second_run_changes_nothing() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("card.tsx");
		fs::write(
			&path,
			"<div className=\"bg-[#F5F2E8] border-[#E6D4C7] shadow-warm\" style={{ color: '#273B3A' }} />",
		)
		.unwrap();
		let paths = vec![path];
		let rule_sets = [dark_luxury().unwrap(), residual().unwrap()];
		let options = MigrateOptions::default();

		let first = run_passes(&paths, &rule_sets, options);
		let second = run_passes(&paths, &rule_sets, options);

		assert_eq!(first.changed_count(), 1);
		assert_eq!(second.changed_count(), 0);
	}

	#[test]
	fn test_dry_run_counts_match_real_run() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("a.tsx");
		fs::write(&path, "bg-[#273B3A]").unwrap();
		let paths = vec![path.clone()];
		let rule_sets = [dark_luxury().unwrap(), residual().unwrap()];

		let dry = run_passes(&paths, &rule_sets, MigrateOptions { dry_run: true });
		assert_eq!(fs::read_to_string(&path).unwrap(), "bg-[#273B3A]");

		let real = run_passes(&paths, &rule_sets, MigrateOptions::default());
		assert_eq!(fs::read_to_string(&path).unwrap(), "bg-[#161616]");

		let counts = |report: &RunReport| {
			report
				.passes
				.iter()
				.map(PassReport::changed_count)
				.collect::<Vec<_>>()
		};
		assert_eq!(counts(&dry), vec![1, 0]);
		assert_eq!(counts(&dry), counts(&real));
	}

	#[test]
	fn test_passes_chain_in_memory() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("icon.tsx");
		fs::write(&path, "bg-cream stroke-[#273B3A]").unwrap();
		let rule_sets = [dark_luxury().unwrap(), residual().unwrap()];

		let flags = migrate_file_passes(&path, &rule_sets, MigrateOptions::default()).unwrap();

		assert_eq!(flags, vec![true, true]);
		assert_eq!(
			fs::read_to_string(&path).unwrap(),
			"bg-[#0A0A0A] stroke-[#CDB49E]"
		);
	}
}
