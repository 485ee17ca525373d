use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest kustomization file we are willing to load (10 MB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Checks that `path` is a regular file we may load and returns its size.
///
/// # Security
/// Uses `symlink_metadata()` so a symbolic link is rejected instead of followed.
/// The edited file is replaced by rename on write, which would silently turn a
/// link into a plain file.
///
/// # Errors
/// Returns an error if:
/// - The metadata cannot be read (missing file, permissions)
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than [`MAX_FILE_SIZE`]
pub fn check_readable_file(path: &Path) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read metadata of {}: {}", path.display(), e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Editing through symbolic links is not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;
    Ok(metadata.len())
}

/// Checks that writing to `path` would not go through a symbolic link.
///
/// A path that does not exist yet is accepted.
pub fn check_writable_target(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => anyhow::bail!(
            "Security: {} is a symbolic link. Writing through symbolic links is not allowed.",
            path.display()
        ),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => anyhow::bail!("Failed to read metadata of {}: {}", path.display(), e),
    }
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
