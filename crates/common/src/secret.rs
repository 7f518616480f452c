//! Signing secret that cannot be accidentally logged.
//!
//! The HMAC key is held in a [`secrecy::SecretBox`] so it is zeroized on drop
//! and redacted in `Debug` output. Any struct deriving `Debug` that contains a
//! [`SigningSecret`] is therefore safe to log with `{:?}` or through tracing.
//!
//! # Example
//!
//! ```rust
//! use common::secret::{ExposeSecret, SigningSecret};
//!
//! let secret = SigningSecret::from("super-secret-jwt-token");
//! assert!(!format!("{secret:?}").contains("super-secret"));
//!
//! // Reading the bytes must be explicit
//! let key: &[u8] = secret.expose_secret();
//! assert_eq!(key, b"super-secret-jwt-token");
//! ```

use secrecy::SecretSlice;
use std::fmt;

pub use secrecy::ExposeSecret;

/// Shared HMAC key used to sign every token in a run.
///
/// Treated as opaque bytes; usually UTF-8 text passed on the command line.
pub struct SigningSecret(SecretSlice<u8>);

impl SigningSecret {
    /// Wraps the given key bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(SecretSlice::from(bytes.into()))
    }

    /// Number of key bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.expose_secret().len()
    }

    /// Whether the key is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }
}

impl ExposeSecret<[u8]> for SigningSecret {
    fn expose_secret(&self) -> &[u8] {
        self.0.expose_secret()
    }
}

impl From<&str> for SigningSecret {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl From<String> for SigningSecret {
    fn from(value: String) -> Self {
        Self::new(value.into_bytes())
    }
}

impl From<Vec<u8>> for SigningSecret {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret([REDACTED])")
    }
}
