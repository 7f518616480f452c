//! JWT primitives for HS256 role tokens.
//!
//! This module provides the building blocks the issuer assembles into a
//! compact token:
//! - The fixed `HS256` header and the `role`/`exp` claims structure
//! - base64url-no-padding segment encoding and decoding
//! - Splitting a compact token into its three segments
//!
//! # Wire Format
//!
//! ```text
//! base64url(header_json) "." base64url(claims_json) "." base64url(hmac_sha256)
//! ```
//!
//! JSON field order is fixed by declaration order: the header serializes as
//! `{"alg":"HS256","typ":"JWT"}` and the claims as `{"role":...,"exp":...}`.
//! Identical inputs therefore always produce identical bytes.
//!
//! # Inspection only
//!
//! Nothing here checks a signature or enforces `exp`. Decoding helpers exist
//! for tests and tooling that need to look inside a token that was just issued.

use crate::error::{Result, TokenError};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Algorithm identifier written into every header.
pub const HS256_ALG: &str = "HS256";

/// Token type written into every header.
pub const JWT_TYP: &str = "JWT";

/// Separator between the three compact segments.
pub const SEGMENT_SEPARATOR: char = '.';

// =============================================================================
// Header and Claims
// =============================================================================

/// JOSE header for HMAC-SHA256 signed tokens.
///
/// Fields are declared in serialization order (`alg`, then `typ`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtHeader {
    /// Signing algorithm, always `HS256`.
    pub alg: String,
    /// Token type, always `JWT`.
    pub typ: String,
}

impl JwtHeader {
    /// The constant header shared by every issued token.
    #[must_use]
    pub fn hs256() -> Self {
        Self {
            alg: HS256_ALG.to_string(),
            typ: JWT_TYP.to_string(),
        }
    }
}

impl Default for JwtHeader {
    fn default() -> Self {
        Self::hs256()
    }
}

/// Role claims consumed by the downstream gateway.
///
/// `role` selects the database role the gateway switches to; `exp` is the
/// expiration timestamp (Unix epoch seconds). Fields are declared in
/// serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleClaims {
    /// Role name, e.g. `anon` or `service_role`.
    pub role: String,
    /// Expiration timestamp (Unix epoch seconds).
    pub exp: i64,
}

impl RoleClaims {
    /// Creates role claims expiring at `exp`.
    #[must_use]
    pub fn new(role: impl Into<String>, exp: i64) -> Self {
        Self {
            role: role.into(),
            exp,
        }
    }
}

// =============================================================================
// Segments
// =============================================================================

/// Borrowed view of the three segments of a compact token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSegments<'a> {
    /// base64url-encoded header JSON
    pub header: &'a str,
    /// base64url-encoded claims JSON
    pub payload: &'a str,
    /// base64url-encoded signature bytes
    pub signature: &'a str,
}

impl TokenSegments<'_> {
    /// The bytes the signature was computed over (`header.payload`).
    #[must_use]
    pub fn signing_input(&self) -> String {
        signing_input(self.header, self.payload)
    }

    /// Decodes the header segment.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Encoding` or `TokenError::Serialization` if the
    /// segment is not base64url-encoded JSON matching [`JwtHeader`].
    pub fn header(&self) -> Result<JwtHeader> {
        decode_segment(self.header)
    }

    /// Decodes the claims segment.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Encoding` or `TokenError::Serialization` if the
    /// segment is not base64url-encoded JSON matching [`RoleClaims`].
    pub fn claims(&self) -> Result<RoleClaims> {
        decode_segment(self.payload)
    }

    /// Decodes the raw signature bytes.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Encoding` if the segment is not base64url text.
    pub fn signature_bytes(&self) -> Result<Vec<u8>> {
        decode_segment_bytes(self.signature)
    }
}

// =============================================================================
// Functions
// =============================================================================

/// Encode bytes as base64url without padding.
///
/// Uses the `-`/`_` alphabet and never emits trailing `=`.
#[must_use]
pub fn encode_segment(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Serialize a value to compact JSON and encode it as a segment.
///
/// # Errors
///
/// Returns `TokenError::Serialization` if `serde_json` rejects the value.
pub fn encode_json_segment<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_vec(value)?;
    Ok(encode_segment(json))
}

/// Decode a base64url-no-padding segment to raw bytes.
///
/// # Errors
///
/// Returns `TokenError::Encoding` if the segment contains characters outside
/// the base64url alphabet or padding.
pub fn decode_segment_bytes(segment: &str) -> Result<Vec<u8>> {
    Ok(URL_SAFE_NO_PAD.decode(segment)?)
}

/// Decode a base64url-no-padding JSON segment into `T`.
///
/// # Errors
///
/// Returns `TokenError::Encoding` for bad base64url text and
/// `TokenError::Serialization` for JSON that does not match `T`.
pub fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T> {
    let bytes = decode_segment_bytes(segment)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Join encoded header and payload into the signing input.
#[must_use]
pub fn signing_input(encoded_header: &str, encoded_payload: &str) -> String {
    format!("{encoded_header}{SEGMENT_SEPARATOR}{encoded_payload}")
}

/// Split a compact token into its three segments.
///
/// Does not decode or verify anything, and applies no length limit.
///
/// # Errors
///
/// Returns `TokenError::MalformedToken` unless there are exactly three
/// non-empty segments.
pub fn split_token(token: &str) -> Result<TokenSegments<'_>> {
    let mut parts = token.split(SEGMENT_SEPARATOR);
    let (Some(header), Some(payload), Some(signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        tracing::debug!(target: "common.jwt", "Token rejected: expected three segments");
        return Err(TokenError::MalformedToken);
    };

    if header.is_empty() || payload.is_empty() || signature.is_empty() {
        return Err(TokenError::MalformedToken);
    }

    Ok(TokenSegments {
        header,
        payload,
        signature,
    })
}

// =============================================================================
// Tests
// =============================================================================
