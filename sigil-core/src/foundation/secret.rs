//! Drop-zeroized container for private key material.

use secrecy::{ExposeSecret, SecretVec};
use std::fmt;

/// Private key bytes for one signing call.
///
/// The backing buffer is zeroized when the value is dropped, so the key is
/// scrubbed from working memory on both the success and failure exit paths
/// of the pipeline. `Debug` never prints the contents.
pub struct SecretBytes {
    inner: SecretVec<u8>,
}

impl SecretBytes {
    pub fn new(data: Vec<u8>) -> Self {
        Self { inner: SecretVec::new(data) }
    }

    pub fn expose(&self) -> &[u8] {
        self.inner.expose_secret()
    }

    pub fn len(&self) -> usize {
        self.inner.expose_secret().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<u8>> for SecretBytes {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for SecretBytes {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretBytes").field("len", &self.len()).finish()
    }
}
