//! Post-copy verification.
//!
//! This module compares a source file and its copy by computing both
//! SHA-256 digests and checking them for exact equality. The two digest
//! computations run concurrently on separate worker threads; they read
//! independent files, so no ordering exists between them and the
//! filesystem is treated as read-only while they run.

use crate::copy::copy_file;
use crate::digest::{Digest, hash_file};
use crate::error::Result;
use std::path::Path;

/// Outcome of comparing a source file against its copy.
///
/// A digest mismatch is a reported outcome, not a failure of the
/// verification mechanics: the read side succeeded, the contents simply
/// differ. Mechanical failures (a file vanished mid-read) surface as
/// [`Error::Digest`](crate::Error::Digest) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// Both files hash to the same digest
    Match {
        /// The shared digest of both files
        digest: Digest,
    },
    /// The files hash to different digests
    Mismatch {
        /// Digest of the source file
        source: Digest,
        /// Digest of the destination file
        destination: Digest,
    },
}

impl Verification {
    /// Whether the two files had identical contents.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }
}

/// Compare the contents of two files by SHA-256 digest.
///
/// The two digests are computed concurrently and joined before the
/// comparison.
///
/// # Errors
///
/// Returns [`Error::Digest`](crate::Error::Digest) if either file cannot
/// be opened or read.
pub fn verify(src: &Path, dst: &Path) -> Result<Verification> {
    let (src_digest, dst_digest) = rayon::join(|| hash_file(src), || hash_file(dst));
    let source = src_digest?;
    let destination = dst_digest?;

    Ok(if source == destination {
        Verification::Match { digest: source }
    } else {
        Verification::Mismatch {
            source,
            destination,
        }
    })
}

/// Copy `src` to `dst`, then verify the copy.
///
/// The verification step only runs after a successful copy; a copy
/// failure propagates immediately and no file is digested.
///
/// # Errors
///
/// Returns [`Error::Copy`](crate::Error::Copy) if the copy step fails
/// and [`Error::Digest`](crate::Error::Digest) if either post-copy read
/// fails.
pub fn copy_and_verify(src: &Path, dst: &Path) -> Result<(u64, Verification)> {
    let bytes_copied = copy_file(src, dst)?;
    let outcome = verify(src, dst)?;
    Ok((bytes_copied, outcome))
}

// =============================================================================
// Tests
// =============================================================================
