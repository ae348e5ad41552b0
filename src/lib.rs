//! # vcopy
//!
//! Single-file copy with streamed SHA-256 verification.
//!
//! ## Core Features
//!
//! - **Single-call copy**: Uses `copy_file_range` on Linux for zero-copy
//!   kernel-side transfer, with a buffered fallback everywhere else
//! - **Streamed digests**: SHA-256 is computed incrementally in 64 KiB
//!   chunks, so arbitrarily large files never have to fit in memory
//! - **Concurrent verification**: The source and destination digests are
//!   computed on separate worker threads and joined before comparison
//! - **No staging file**: The destination is written in place; the copy
//!   makes no atomicity guarantee and an interrupted run may leave a
//!   partial destination file
//!
//! ## Quick Start
//!
//! Copy a file and check the result end to end:
//!
//! ```no_run
//! use vcopy::copy_and_verify;
//! use std::path::Path;
//!
//! let (bytes, outcome) = copy_and_verify(Path::new("in.dat"), Path::new("out.dat"))?;
//! if outcome.is_match() {
//!     println!("copied {bytes} bytes, contents identical");
//! }
//! # Ok::<(), vcopy::Error>(())
//! ```
//!
//! The pieces are also usable on their own:
//!
//! ```no_run
//! use vcopy::{copy_file, hash_file};
//! use std::path::Path;
//!
//! let bytes = copy_file(Path::new("in.dat"), Path::new("out.dat"))?;
//! let digest = hash_file(Path::new("out.dat"))?;
//! println!("{bytes} bytes, sha256 {digest}");
//! # Ok::<(), vcopy::Error>(())
//! ```
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Structured logging with tracing crate |
//! | `serde` | Serialize/Deserialize for [`Digest`] as its hex string |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod copy;
mod digest;
mod error;
mod utils;
mod verify;

pub use copy::copy_file;
pub use digest::{Digest, hash_file};
pub use error::{Error, Result, is_no_space_error};
pub use verify::{Verification, copy_and_verify, verify};
