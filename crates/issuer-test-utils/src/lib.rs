//! # Issuer Test Utilities
//!
//! Shared test utilities for the token issuer.
//!
//! This crate provides:
//! - Deterministic fixtures (fixed secret, fixed clock instant, known tokens)
//! - Custom assertions (`TokenAssertions` trait)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use issuer_test_utils::*;
//!
//! #[test]
//! fn test_example() {
//!     let token = issue_at(&test_secret(), "anon", 10, FIXED_NOW)?;
//!
//!     token
//!         .assert_valid_jwt()
//!         .assert_role("anon")
//!         .assert_signed_with(TEST_SECRET.as_bytes());
//! }
//! ```

pub mod assertions;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::*;
pub use fixtures::*;
