//! Token primitives shared by the issuer binary and its test tooling.

#![warn(clippy::pedantic)]

/// Module for common error types
pub mod error;

/// Module for the signing secret type that prevents accidental logging
pub mod secret;

/// Module for JWT utilities (header, claims, segment encoding)
pub mod jwt;
