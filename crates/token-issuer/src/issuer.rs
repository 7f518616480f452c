//! HS256 role token construction.
//!
//! A token is `base64url(header).base64url(claims).base64url(hmac)` where the
//! HMAC-SHA256 tag is computed over the first two segments joined by a dot,
//! keyed with the shared secret. All three segments use base64url without
//! padding, and the signature segment encodes the raw 32-byte tag.
//!
//! Expiry uses a fixed 365-day year and ignores leap days, so a ten year
//! token expires two or three days before the calendar anniversary.

use crate::errors::IssuerError;
use chrono::Utc;
use common::jwt::{encode_json_segment, encode_segment, signing_input, JwtHeader, RoleClaims};
use common::secret::{ExposeSecret, SigningSecret};
use ring::hmac;
use tracing::{debug, instrument};

/// Lifetime of issued tokens when the caller does not choose one.
pub const DEFAULT_EXPIRY_YEARS: u32 = 10;

/// Seconds in a fixed 365-day year.
pub const SECONDS_PER_YEAR: i64 = 365 * 24 * 60 * 60;

/// Expiration timestamp `expiry_years` fixed-length years after `now`.
///
/// Saturates at `i64::MAX` instead of overflowing.
#[must_use]
pub fn expiry_from(now: i64, expiry_years: u32) -> i64 {
    now.saturating_add(i64::from(expiry_years).saturating_mul(SECONDS_PER_YEAR))
}

/// Issue a token for `role` expiring `expiry_years` from the current time.
///
/// # Errors
///
/// Returns `IssuerError::Token` if the header or claims fail to serialize.
#[instrument(skip_all, fields(role = %role))]
pub fn issue(secret: &SigningSecret, role: &str, expiry_years: u32) -> Result<String, IssuerError> {
    issue_at(secret, role, expiry_years, Utc::now().timestamp())
}

/// Issue a token for `role` as if the current time were `now`.
///
/// Pure function of its inputs: the same secret, role, lifetime and `now`
/// always yield the same token.
///
/// # Errors
///
/// Returns `IssuerError::Token` if the header or claims fail to serialize.
#[instrument(skip_all, fields(role = %role))]
pub fn issue_at(
    secret: &SigningSecret,
    role: &str,
    expiry_years: u32,
    now: i64,
) -> Result<String, IssuerError> {
    let claims = RoleClaims::new(role, expiry_from(now, expiry_years));

    let encoded_header = encode_json_segment(&JwtHeader::hs256())?;
    let encoded_claims = encode_json_segment(&claims)?;
    let input = signing_input(&encoded_header, &encoded_claims);

    let signature = sign(secret, input.as_bytes());

    debug!(
        target: "token_issuer.issuer",
        exp = claims.exp,
        "Role token signed"
    );

    Ok(format!("{input}.{signature}"))
}

/// HMAC-SHA256 over `message`, encoded as a base64url-no-padding segment.
#[must_use]
pub fn sign(secret: &SigningSecret, message: &[u8]) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, secret.expose_secret());
    let tag = hmac::sign(&key, message);
    encode_segment(tag.as_ref())
}
