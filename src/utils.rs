use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::Path;

/// Ensures the directory exists, creating it and its parents if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Copies a file and carries over its modification time.
/// Permissions are copied by `fs::copy` itself, so the copy may already be
/// read-only when its times are set; updating them only needs ownership.
pub fn copy_with_metadata(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst)
        .with_context(|| format!("Failed to copy {} -> {}", src.display(), dst.display()))?;

    let modified = fs::metadata(src)
        .and_then(|meta| meta.modified())
        .with_context(|| format!("Failed to read metadata: {}", src.display()))?;

    let file = File::open(dst)
        .with_context(|| format!("Failed to reopen copy: {}", dst.display()))?;
    file.set_modified(modified)
        .with_context(|| format!("Failed to set modification time: {}", dst.display()))?;

    Ok(())
}
