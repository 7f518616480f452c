//! Labeled console output for a run.
//!
//! Each role gets a section `<ROLE>_TOKEN:` followed by the token on its own
//! line; sections are separated by a blank line:
//!
//! ```text
//! ANON_TOKEN:
//! eyJ...
//!
//! SERVICE_ROLE_TOKEN:
//! eyJ...
//! ```

use crate::config::Config;
use crate::errors::IssuerError;
use crate::issuer::issue_at;
use std::fmt;
use std::io::Write;

/// A token issued for one role, with the label it is printed under.
#[derive(Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub label: String,
    pub role: String,
    pub token: String,
}

/// The token is a bearer credential, so Debug only shows its length.
impl fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedToken")
            .field("label", &self.label)
            .field("role", &self.role)
            .field("token", &format_args!("[REDACTED; {} bytes]", self.token.len()))
            .finish()
    }
}

/// Section label for a role: `service_role` prints as `SERVICE_ROLE_TOKEN`.
pub fn label_for(role: &str) -> String {
    format!("{}_TOKEN", role.to_uppercase())
}

/// Issue one token per configured role, all against the same `now`.
pub fn issue_all(config: &Config, now: i64) -> Result<Vec<IssuedToken>, IssuerError> {
    config
        .roles
        .iter()
        .map(|role| -> Result<IssuedToken, IssuerError> {
            let token = issue_at(&config.secret, role, config.expiry_years, now)?;
            Ok(IssuedToken {
                label: label_for(role),
                role: role.clone(),
                token,
            })
        })
        .collect()
}

/// Render the labeled sections exactly as printed to stdout.
pub fn render(tokens: &[IssuedToken]) -> String {
    tokens
        .iter()
        .map(|issued| format!("{}:\n{}\n", issued.label, issued.token))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn write_tokens<W: Write>(tokens: &[IssuedToken], out: &mut W) -> Result<(), IssuerError> {
    out.write_all(render(tokens).as_bytes())?;
    out.flush()?;
    Ok(())
}
