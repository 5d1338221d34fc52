//! Writes a [`Plan`] to disk.
//! Directories are created idempotently, files are overwritten, and scripts
//! get the executable bit. Nothing is ever deleted.

use crate::error::Result;
use crate::plan::{FileRole, Plan};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Counts of what a materialization created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeStats {
    pub directories: usize,
    pub files: usize,
    pub scripts: usize,
}

/// Creates `path` and any missing ancestors. Succeeds if it already exists.
pub fn ensure_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path)?;
    info!("Created: {}", path.display());
    Ok(())
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions)?;
    Ok(())
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Writes `content` as the complete contents of `path`.
///
/// The parent directory is created first. An existing file is truncated.
/// Files with [`FileRole::ExecutableScript`] are made executable afterwards.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str, role: FileRole) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;

    if role == FileRole::ExecutableScript {
        debug!("Marking {} as executable", path.display());
        set_executable(path)?;
    }

    info!("Created: {}", path.display());
    Ok(())
}

/// Creates every planned directory, then writes every planned file.
///
/// Stops at the first failure; whatever was created before it stays on disk.
pub fn materialize(plan: &Plan) -> Result<MaterializeStats> {
    let mut stats = MaterializeStats::default();

    for directory in &plan.directories {
        ensure_directory(directory)?;
        stats.directories += 1;
    }

    for entry in &plan.files {
        write_file(&entry.path, &entry.content, entry.role)?;
        stats.files += 1;
        if entry.role == FileRole::ExecutableScript {
            stats.scripts += 1;
        }
    }

    Ok(stats)
}
