//! Candidate file discovery.
//!
//! Expands `<root>/**/*.<ext>` for every configured extension, then drops
//! anything on the skip list. The result is sorted and free of duplicates.

use crate::error::{MigrateError, Result};
use glob::Pattern;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Inputs for one discovery run.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions<'a> {
	/// Directory searched recursively.
	pub root: &'a Path,

	/// Extension whitelist, without leading dots.
	pub extensions: &'a [String],

	/// Skip entries: a path suffix or a glob pattern.
	pub skip: &'a [String],
}

/// A compiled skip list entry.
#[derive(Debug)]
struct SkipEntry {
	path: PathBuf,
	pattern: Option<Pattern>,
}

impl SkipEntry {
	fn compile(entry: &str) -> Result<Self> {
		let pattern = if entry.contains(['*', '?', '[']) {
			Some(
				Pattern::new(entry).map_err(|source| MigrateError::InvalidGlob {
					pattern: entry.to_string(),
					source,
				})?,
			)
		} else {
			None
		};

		Ok(SkipEntry {
			path: PathBuf::from(entry),
			pattern,
		})
	}

	fn matches(&self, candidate: &Path) -> bool {
		match &self.pattern {
			Some(pattern) => pattern.matches_path(candidate),
			None => candidate.ends_with(&self.path),
		}
	}
}

/// Find every candidate file under `options.root`.
pub fn discover_files(options: &DiscoveryOptions) -> Result<Vec<PathBuf>> {
	if !options.root.is_dir() {
		return Err(MigrateError::RootNotFound {
			path: options.root.to_path_buf(),
		});
	}

	let skip = options
		.skip
		.iter()
		.map(|entry| SkipEntry::compile(entry.as_str()))
		.collect::<Result<Vec<_>>>()?;

	let root = Pattern::escape(&options.root.to_string_lossy());
	let mut files = BTreeSet::new();

	for ext in options.extensions {
		let pattern = format!("{root}/**/*.{}", Pattern::escape(ext));
		let entries = glob::glob(&pattern).map_err(|source| MigrateError::InvalidGlob {
			pattern: pattern.clone(),
			source,
		})?;

		for entry in entries {
			match entry {
				Ok(path) if path.is_file() => {
					files.insert(path);
				}
				Ok(_) => {}
				Err(e) => {
					tracing::warn!(path = %e.path().display(), error = %e.error(), "unreadable entry skipped");
				}
			}
		}
	}

	Ok(files
		.into_iter()
		.filter(|path| {
			let skipped = skip.iter().any(|entry| entry.matches(path));
			if skipped {
				tracing::debug!(path = %path.display(), "skipped");
			}
			!skipped
		})
		.collect())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	fn touch(root: &Path, relative: &str) {
		let path = root.join(relative);
		fs::create_dir_all(path.parent().unwrap()).unwrap();
		fs::write(path, "").unwrap();
	}

	fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
		files
			.iter()
			.map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
			.collect()
	}

	fn strings(items: &[&str]) -> Vec<String> {
		items.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn test_discovers_by_extension_sorted() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		touch(root, "src/b.tsx");
		touch(root, "src/a.ts");
		touch(root, "src/nested/deep/c.tsx");
		touch(root, "src/styles.css");
		touch(root, "src/readme.md");

		let src = root.join("src");
		let extensions = strings(&["tsx", "ts"]);
		let files = discover_files(&DiscoveryOptions {
			root: &src,
			extensions: &extensions,
			skip: &[],
		})
		.unwrap();

		assert_eq!(
			relative(root, &files),
			vec!["src/a.ts", "src/b.tsx", "src/nested/deep/c.tsx"]
		);
	}

	#[test]
	fn test_skip_by_path_suffix() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		touch(root, "src/app/page.tsx");
		touch(root, "src/app/theme.ts");
		touch(root, "src/lib/theme.tsx");

		let src = root.join("src");
		let extensions = strings(&["tsx", "ts"]);
		let skip = strings(&["app/theme.ts"]);
		let files = discover_files(&DiscoveryOptions {
			root: &src,
			extensions: &extensions,
			skip: &skip,
		})
		.unwrap();

		assert_eq!(
			relative(root, &files),
			vec!["src/app/page.tsx", "src/lib/theme.tsx"]
		);
	}

	#[test]
	fn test_skip_by_glob() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		touch(root, "src/keep.tsx");
		touch(root, "src/legacy/old.tsx");
		touch(root, "src/legacy/older.ts");

		let src = root.join("src");
		let extensions = strings(&["tsx", "ts"]);
		let skip = strings(&["*/legacy/*"]);
		let files = discover_files(&DiscoveryOptions {
			root: &src,
			extensions: &extensions,
			skip: &skip,
		})
		.unwrap();

		assert_eq!(relative(root, &files), vec!["src/keep.tsx"]);
	}

	#[test]
	fn test_suffix_match_is_component_wise() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		touch(root, "src/mytheme.ts");

		let src = root.join("src");
		let extensions = strings(&["ts"]);
		let skip = strings(&["theme.ts"]);
		let files = discover_files(&DiscoveryOptions {
			root: &src,
			extensions: &extensions,
			skip: &skip,
		})
		.unwrap();

		assert_eq!(relative(root, &files), vec!["src/mytheme.ts"]);
	}

	#[test]
	fn test_missing_root() {
		let temp_dir = tempfile::tempdir().unwrap();
		let missing = temp_dir.path().join("nope");
		let extensions = strings(&["ts"]);
		let result = discover_files(&DiscoveryOptions {
			root: &missing,
			extensions: &extensions,
			skip: &[],
		});

		assert!(matches!(
			result.unwrap_err(),
			MigrateError::RootNotFound { .. }
		));
	}

	#[test]
	fn test_invalid_skip_glob() {
		let temp_dir = tempfile::tempdir().unwrap();
		let extensions = strings(&["ts"]);
		let skip = strings(&["[unclosed"]);
		let result = discover_files(&DiscoveryOptions {
			root: temp_dir.path(),
			extensions: &extensions,
			skip: &skip,
		});

		assert!(matches!(
			result.unwrap_err(),
			MigrateError::InvalidGlob { .. }
		));
	}
}
