//! Error types for vcopy.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur during copy and verification operations, and the
//! [`Result`] type alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | Copy | [`Error::Copy`], [`Error::IsADirectory`] |
//! | Digest | [`Error::Digest`], [`Error::InvalidDigest`] |
//! | IO | [`Error::Io`] |

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for vcopy operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Check if an IO error indicates "no space left on device".
///
/// This helper function detects storage-full conditions across platforms.
///
/// # Platform Support
///
/// | Platform | Error Detection |
/// |----------|-----------------|
/// | Unix | `ENOSPC` (errno 28) |
/// | Windows | `ERROR_DISK_FULL` (0x70) |
///
/// # Example
///
/// ```no_run
/// use std::io;
/// use vcopy::is_no_space_error;
///
/// let error = io::Error::new(io::ErrorKind::StorageFull, "disk full");
/// if is_no_space_error(&error) {
///     println!("Destination has no space!");
/// }
/// ```
pub fn is_no_space_error(error: &io::Error) -> bool {
    if error.kind() == io::ErrorKind::StorageFull {
        return true;
    }

    #[cfg(unix)]
    {
        // The raw OS error might be available even if kind() isn't StorageFull
        if let Some(raw_error) = error.raw_os_error() {
            // ENOSPC = 28 on most Unix systems
            const ENOSPC: i32 = 28;
            return raw_error == ENOSPC;
        }
    }

    #[cfg(windows)]
    {
        if let Some(raw_error) = error.raw_os_error() {
            const ERROR_DISK_FULL: i32 = 112;
            return raw_error == ERROR_DISK_FULL;
        }
    }

    false
}

/// Errors that can occur during copy and verification operations.
///
/// All errors include relevant path information to aid debugging.
/// Use the [`std::error::Error`] trait methods to access underlying
/// causes where applicable.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error outside the copy and digest paths
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The copy primitive failed (missing source, permission denied,
    /// invalid destination path, disk full)
    #[error("Failed to copy {path}: {source}")]
    Copy {
        /// The path involved in the failed copy step
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// A read failed while streaming a file through the hash function
    #[error("Failed to digest {path}: {source}")]
    Digest {
        /// The file being digested when the read failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Source is a directory, only single files can be copied
    #[error("Source is a directory: {0}")]
    IsADirectory(PathBuf),

    /// A hex string could not be parsed into a digest value
    #[error("Invalid digest: {0}")]
    InvalidDigest(String),
}
