//! SHA-256 digest value type and streaming file hashing.
//!
//! A [`Digest`] is used purely for equality comparison between a source
//! and its copy, not for any security purpose. Files are streamed through
//! the hash in fixed-size chunks so memory use stays constant regardless
//! of file size.

use crate::error::{Error, Result};
use crate::utils::path::to_absolute;
use sha2::{Digest as _, Sha256};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Size of chunks for streaming hash computation
const CHUNK_SIZE: usize = 64 * 1024; // 64KB

/// A SHA-256 digest value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: [u8; 32],
}

impl Digest {
    /// Create a digest from raw bytes
    #[must_use]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Get the raw bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Convert to lowercase hex string
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parse from hex string
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDigest`] if the input is not valid
    /// hexadecimal or is not exactly 64 characters (32 bytes).
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|e| Error::InvalidDigest(format!("invalid hex: {e}")))?;

        if bytes.len() != 32 {
            return Err(Error::InvalidDigest(format!(
                "digest must be 32 bytes, got {}",
                bytes.len()
            )));
        }

        let mut array = [0u8; 32];
        array.copy_from_slice(&bytes);
        Ok(Self::from_bytes(array))
    }

    /// Compute the digest of a byte slice
    #[must_use]
    pub fn from_data(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self::from_bytes(hasher.finalize().into())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl serde::Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> serde::Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Compute the SHA-256 digest of a file.
///
/// The file is read in 64 KiB chunks and fed to the hash incrementally;
/// the whole file is never resident in memory.
///
/// # Errors
///
/// Returns [`Error::Digest`] if the file cannot be opened or a read
/// fails partway through (e.g., the file was deleted after the copy).
pub fn hash_file(path: &Path) -> Result<Digest> {
    let path = to_absolute(path).map_err(|source| Error::Digest {
        path: path.to_path_buf(),
        source,
    })?;
    let mut file = File::open(&path).map_err(|source| Error::Digest {
        path: path.clone(),
        source,
    })?;

    let mut hasher = Sha256::new();
    let mut buffer = vec![0; CHUNK_SIZE];

    loop {
        let n = file.read(&mut buffer).map_err(|source| Error::Digest {
            path: path.clone(),
            source,
        })?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    let digest = Digest::from_bytes(hasher.finalize().into());

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), digest = %digest, "file digested");

    Ok(digest)
}

// =============================================================================
// Tests
// =============================================================================
