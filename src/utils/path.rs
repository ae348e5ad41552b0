//! Path utilities.
//!
//! This module provides the absolute-path resolution used at the entry of
//! every file operation.

use std::io;
use std::path::{Path, PathBuf};

/// Resolve a path to absolute form without touching the filesystem.
///
/// Relative paths are resolved against the current working directory.
/// The resolution is purely lexical: symlinks are not followed and `..`
/// components are kept, so the path still names the user's intended
/// target when it is later handed to the OS. The path does not need to
/// exist.
///
/// # Errors
///
/// Fails for an empty path, or when the current working directory cannot
/// be determined.
pub(crate) fn to_absolute(path: &Path) -> io::Result<PathBuf> {
    std::path::absolute(path)
}
