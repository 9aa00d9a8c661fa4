//! Fingerprint Token Value Object
//!
//! The content-identity marker compared against an object store's ETag.

use std::fmt;

/// Content fingerprint in the object store's native ETag format
///
/// Wraps a lowercase hex MD5 digest in double quotes (`"65a8e2..."`), which is
/// how S3 reports the ETag of an object uploaded in a single request. Tokens
/// are compared by plain string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FingerprintToken(String);

impl FingerprintToken {
    /// Quote character surrounding the digest
    pub const QUOTE: char = '"';

    /// Create a token from a raw ETag string, quoting it if the store did not
    pub fn new(raw: &str) -> Self {
        if raw.len() >= 2 && raw.starts_with(Self::QUOTE) && raw.ends_with(Self::QUOTE) {
            Self(raw.to_string())
        } else {
            Self(format!("{q}{raw}{q}", q = Self::QUOTE))
        }
    }

    /// Create a token by computing the MD5 of in-memory content
    pub fn from_content(content: &[u8]) -> Self {
        use md5::{Digest, Md5};
        Self::new(&format!("{:x}", Md5::digest(content)))
    }

    /// Full token including quotes
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Just the digest, without quotes
    pub fn hex(&self) -> &str {
        self.0.trim_matches(Self::QUOTE)
    }

    /// Whether the remote token looks like a multipart ETag (`"<hex>-<parts>"`)
    ///
    /// Such tokens never equal a whole-file digest.
    pub fn is_multipart(&self) -> bool {
        self.hex().contains('-')
    }
}

impl fmt::Display for FingerprintToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FingerprintToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FingerprintToken {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl AsRef<str> for FingerprintToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
