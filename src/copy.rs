//! Single file copy.
//!
//! This module provides [`copy_file`], which duplicates the byte contents
//! of one file at another path. The destination is created or truncated
//! in place: there is no staging file and no atomic rename, so a copy
//! interrupted partway leaves a partial destination file.

use crate::error::{Error, Result};
use crate::utils::path::to_absolute;
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Copy the full byte contents of `src` to `dst`.
///
/// Both paths are resolved to absolute form before use. The source is not
/// checked for existence up front; the copy attempt itself surfaces
/// "not found" through [`Error::Copy`]. The destination file is created
/// if missing and truncated if present.
///
/// On Linux the transfer uses the `copy_file_range(2)` syscall so data
/// never enters userspace, falling back to a buffered copy when the
/// filesystem does not support it. Other platforms use the buffered copy
/// directly.
///
/// # Returns
///
/// The number of bytes copied.
///
/// # Errors
///
/// Returns an error if:
/// - Source is a directory ([`Error::IsADirectory`])
/// - The copy primitive fails: source missing, permission denied,
///   invalid destination path, disk full ([`Error::Copy`])
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    let src = to_absolute(src).map_err(|source| Error::Copy {
        path: src.to_path_buf(),
        source,
    })?;
    let dst = to_absolute(dst).map_err(|source| Error::Copy {
        path: dst.to_path_buf(),
        source,
    })?;

    // Single stat call covers the directory check and the length
    let src_meta = fs::metadata(&src).map_err(|source| Error::Copy {
        path: src.clone(),
        source,
    })?;
    if src_meta.is_dir() {
        return Err(Error::IsADirectory(src));
    }
    let file_len = src_meta.len();

    let src_file = File::open(&src).map_err(|source| Error::Copy {
        path: src.clone(),
        source,
    })?;
    let dst_file = File::create(&dst).map_err(|source| Error::Copy {
        path: dst.clone(),
        source,
    })?;

    let bytes_copied = copy_file_contents(&src_file, &dst_file, file_len).map_err(|source| {
        Error::Copy {
            path: dst.clone(),
            source,
        }
    })?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        bytes = bytes_copied,
        src = %src.display(),
        dst = %dst.display(),
        "file copied"
    );

    Ok(bytes_copied)
}

/// Copy file contents using the best available method.
///
/// On Linux 4.5+, uses `copy_file_range` for zero-copy kernel-to-kernel
/// transfer. Falls back to a buffered copy on other platforms or when the
/// syscall is unsupported.
fn copy_file_contents(src: &File, dst: &File, len: u64) -> io::Result<u64> {
    #[cfg(target_os = "linux")]
    {
        copy_file_range_all(src, dst, len)
    }
    #[cfg(not(target_os = "linux"))]
    {
        use std::io::BufReader;
        let _ = len; // unused on non-Linux
        io::copy(&mut BufReader::new(src), &mut &*dst)
    }
}

/// Linux-specific: copy using copy_file_range(2).
///
/// Falls back to io::copy if copy_file_range fails before any bytes move
/// (e.g., cross-filesystem or unsupported filesystem).
#[cfg(target_os = "linux")]
fn copy_file_range_all(src: &File, dst: &File, len: u64) -> io::Result<u64> {
    use std::os::unix::io::AsRawFd;

    let src_fd = src.as_raw_fd();
    let dst_fd = dst.as_raw_fd();
    let mut remaining = len;
    let mut copied: u64 = 0;

    while remaining > 0 {
        // 128MB per call keeps kernel resources bounded on huge files
        let chunk_size = remaining.min(128 * 1024 * 1024) as usize;

        // SAFETY: valid file descriptors, null offsets mean "use and
        // advance the current file position"
        let result = unsafe {
            libc::copy_file_range(
                src_fd,
                std::ptr::null_mut(),
                dst_fd,
                std::ptr::null_mut(),
                chunk_size,
                0, // flags (reserved, must be 0)
            )
        };

        if result < 0 {
            let err = io::Error::last_os_error();
            // EXDEV: cross-device, ENOSYS: not supported, EINVAL: fs
            // doesn't support it. Only fall back while nothing has been
            // written yet.
            if copied == 0
                && matches!(
                    err.raw_os_error(),
                    Some(libc::EXDEV)
                        | Some(libc::ENOSYS)
                        | Some(libc::EINVAL)
                        | Some(libc::EOPNOTSUPP)
                )
            {
                use std::io::BufReader;
                return io::copy(&mut BufReader::new(src), &mut &*dst);
            }
            return Err(err);
        }

        if result == 0 {
            // EOF reached (file may have been truncated under us)
            break;
        }

        let bytes_copied = result as u64;
        copied += bytes_copied;
        remaining = remaining.saturating_sub(bytes_copied);
    }

    Ok(copied)
}

// =============================================================================
// Tests
// =============================================================================
