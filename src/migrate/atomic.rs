use crate::error::{MigrateError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace the contents of `path` with `content` in one step.
///
/// Writes a temp file next to `path`, syncs it, copies over the original
/// permissions and renames it into place. Readers see either the old bytes
/// or the new ones. On failure the original file is left as it was.
///
/// A symlink is followed: the file it points at is replaced and the link
/// itself stays in place.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
	let write_err = |source: std::io::Error| MigrateError::FileWrite {
		path: path.to_path_buf(),
		source,
	};

	let target = std::fs::canonicalize(path).map_err(write_err)?;
	let dir = target.parent().unwrap_or(Path::new("."));

	let permissions = std::fs::metadata(&target).map_err(write_err)?.permissions();

	let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
	temp.write_all(content.as_bytes()).map_err(write_err)?;
	temp.as_file().sync_all().map_err(write_err)?;
	std::fs::set_permissions(temp.path(), permissions).map_err(write_err)?;

	temp.persist(&target).map_err(|e| write_err(e.error))?;

	Ok(())
}
