//! Custom test assertions for expressive tests
//!
//! Provides trait-based assertions for issued role tokens. Decoding here uses
//! `base64` and `ring` directly rather than the issuer's own helpers, so a bug
//! in the encoder cannot hide itself.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use common::jwt::RoleClaims;
use ring::hmac;

/// Exact header JSON every token must carry.
const EXPECTED_HEADER_JSON: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Custom assertions for issued tokens
///
/// # Example
/// ```rust,ignore
/// token
///     .assert_valid_jwt()
///     .assert_role("service_role")
///     .assert_signed_with(b"mysecret");
/// ```
pub trait TokenAssertions {
    /// Assert three base64url-no-padding segments, the HS256 header and parseable claims
    fn assert_valid_jwt(&self) -> &Self;

    /// Assert that the `role` claim equals `role`
    fn assert_role(&self, role: &str) -> &Self;

    /// Assert that the `exp` claim equals `exp`
    fn assert_expires_at(&self, exp: i64) -> &Self;

    /// Assert that the token expires `seconds` from now, within `tolerance` seconds
    fn assert_expires_in(&self, seconds: i64, tolerance: i64) -> &Self;

    /// Assert that the signature is HMAC-SHA256 over `header.payload` keyed by `secret`
    fn assert_signed_with(&self, secret: &[u8]) -> &Self;
}

fn segments(token: &str) -> Vec<&str> {
    let parts: Vec<_> = token.split('.').collect();
    assert_eq!(
        parts.len(),
        3,
        "JWT must have 3 parts (header.payload.signature), got {}",
        parts.len()
    );
    parts
}

fn decode_claims(token: &str) -> RoleClaims {
    let parts = segments(token);
    let payload = URL_SAFE_NO_PAD
        .decode(parts[1])
        .expect("Invalid JWT payload");
    serde_json::from_slice(&payload).expect("Failed to parse JWT claims")
}

impl TokenAssertions for str {
    fn assert_valid_jwt(&self) -> &Self {
        let parts = segments(self);

        for (name, part) in ["header", "payload", "signature"].iter().zip(&parts) {
            assert!(!part.is_empty(), "JWT {} segment is empty", name);
            assert!(
                part.bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'),
                "JWT {} segment contains characters outside base64url: {}",
                name,
                part
            );
        }

        let header = URL_SAFE_NO_PAD.decode(parts[0]);
        assert!(
            header.is_ok(),
            "Failed to base64 decode JWT header: {:?}",
            header.err()
        );
        assert_eq!(
            String::from_utf8(header.unwrap()).expect("Header is not UTF-8"),
            EXPECTED_HEADER_JSON,
            "Unexpected JWT header"
        );

        let payload = URL_SAFE_NO_PAD.decode(parts[1]);
        assert!(
            payload.is_ok(),
            "Failed to base64 decode JWT payload: {:?}",
            payload.err()
        );
        let claims: Result<RoleClaims, _> = serde_json::from_slice(&payload.unwrap());
        assert!(
            claims.is_ok(),
            "Failed to parse JWT claims JSON: {:?}",
            claims.err()
        );

        let signature = URL_SAFE_NO_PAD.decode(parts[2]);
        assert!(
            signature.is_ok(),
            "Failed to base64 decode JWT signature: {:?}",
            signature.err()
        );
        assert_eq!(
            signature.unwrap().len(),
            32,
            "HS256 signature must be 32 raw bytes"
        );

        self
    }

    fn assert_role(&self, role: &str) -> &Self {
        let claims = decode_claims(self);
        assert_eq!(
            claims.role, role,
            "Expected role '{}', got '{}'",
            role, claims.role
        );

        self
    }

    fn assert_expires_at(&self, exp: i64) -> &Self {
        let claims = decode_claims(self);
        assert_eq!(claims.exp, exp, "Expected exp {}, got {}", exp, claims.exp);

        self
    }

    fn assert_expires_in(&self, seconds: i64, tolerance: i64) -> &Self {
        let claims = decode_claims(self);

        let now = chrono::Utc::now().timestamp();
        let expires_in = claims.exp - now;

        assert!(
            (expires_in - seconds).abs() <= tolerance,
            "Expected token to expire in {} seconds (±{}), but expires in {} seconds",
            seconds,
            tolerance,
            expires_in
        );

        self
    }

    fn assert_signed_with(&self, secret: &[u8]) -> &Self {
        let parts = segments(self);
        let signing_input = format!("{}.{}", parts[0], parts[1]);

        let key = hmac::Key::new(hmac::HMAC_SHA256, secret);
        let expected = URL_SAFE_NO_PAD.encode(hmac::sign(&key, signing_input.as_bytes()));

        assert_eq!(
            parts[2], expected,
            "Signature does not match HMAC-SHA256 of the signing input"
        );

        self
    }
}
