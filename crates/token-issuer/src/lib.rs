//! Issues long-lived HS256 role tokens for the PostgREST gateway.
//!
//! The `generate-jwt` binary takes the shared JWT secret as its only argument
//! and prints one token for the `anon` role and one for `service_role`.
//!
//! ```rust
//! use common::secret::SigningSecret;
//! use token_issuer::issuer::{issue_at, DEFAULT_EXPIRY_YEARS};
//!
//! let secret = SigningSecret::from("mysecret");
//! let token = issue_at(&secret, "anon", DEFAULT_EXPIRY_YEARS, 1_700_000_000).unwrap();
//! assert_eq!(token.split('.').count(), 3);
//! ```

pub mod config;
pub mod errors;
pub mod issuer;
pub mod output;

use chrono::Utc;
use config::Config;
use errors::IssuerError;
use std::io::Write;
use tracing::info;

/// Issue a token for every configured role and write the labeled sections.
///
/// All tokens in one run share the same clock reading.
///
/// # Errors
///
/// Returns `IssuerError::Token` if a token cannot be encoded and
/// `IssuerError::Output` if writing to `out` fails.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<(), IssuerError> {
    let now = Utc::now().timestamp();
    let tokens = output::issue_all(config, now)?;

    output::write_tokens(&tokens, out)?;

    info!(
        target: "token_issuer",
        count = tokens.len(),
        expiry_years = config.expiry_years,
        "Role tokens issued"
    );
    Ok(())
}
