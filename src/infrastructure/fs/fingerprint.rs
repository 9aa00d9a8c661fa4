//! Content Fingerprinting
//!
//! Streams local files through MD5 to predict the ETag the object store holds
//! for the same bytes.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use md5::{Digest, Md5};

use crate::domain::value_objects::FingerprintToken;

/// Read size used while hashing
pub const CHUNK_SIZE: usize = 4096;

/// Size at which S3 stops reporting a plain MD5 ETag (5 GiB)
pub const MULTIPART_THRESHOLD: u64 = 5 * 1024 * 1024 * 1024;

/// Computes content fingerprints for local files
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentFingerprinter;

impl ContentFingerprinter {
    pub fn new() -> Self {
        Self
    }

    /// MD5 of the file's bytes as a quoted hex token.
    pub fn fingerprint(&self, path: &Path) -> io::Result<FingerprintToken> {
        let mut file = File::open(path)?;
        let mut hasher = Md5::new();
        let mut buffer = [0u8; CHUNK_SIZE];

        loop {
            let read = file.read(&mut buffer)?;
            if read == 0 {
                break;
            }
            hasher.update(&buffer[..read]);
        }

        Ok(FingerprintToken::new(&format!("{:x}", hasher.finalize())))
    }

    /// Token the object store is expected to report for this file.
    ///
    /// Known limitation: at or above [`MULTIPART_THRESHOLD`] the real store
    /// derives the ETag from per-part digests. That is not emulated; the
    /// whole-file digest is returned instead, so such files never compare
    /// equal and are always re-uploaded.
    pub fn predict_remote_token(&self, path: &Path) -> io::Result<FingerprintToken> {
        let size = std::fs::metadata(path)?.len();
        if size >= MULTIPART_THRESHOLD {
            tracing::debug!(
                path = %path.display(),
                size,
                "file exceeds multipart threshold; using whole-file digest"
            );
        }
        self.fingerprint(path)
    }

    /// Whether the local file's predicted token equals `remote_token`.
    pub fn same_content(&self, local_path: &Path, remote_token: &FingerprintToken) -> io::Result<bool> {
        Ok(self.predict_remote_token(local_path)? == *remote_token)
    }
}
