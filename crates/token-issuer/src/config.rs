use crate::issuer::DEFAULT_EXPIRY_YEARS;
use common::secret::SigningSecret;
use std::env;
use std::ffi::OsString;
use thiserror::Error;
use tracing::debug;

/// Printed to stderr when the secret argument is missing.
pub const USAGE: &str = "Usage: generate-jwt <SECRET>";

/// Role used by the gateway for unauthenticated requests.
pub const ANON_ROLE: &str = "anon";

/// Role used by backend services; bypasses row level security.
pub const SERVICE_ROLE: &str = "service_role";

/// Roles issued on every run, in output order.
pub const DEFAULT_ROLES: [&str; 2] = [ANON_ROLE, SERVICE_ROLE];

#[derive(Debug)]
pub struct Config {
    pub secret: SigningSecret,
    pub expiry_years: u32,
    pub roles: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required argument: <SECRET>")]
    MissingSecret,
}

impl Config {
    /// Load configuration from the process arguments (program name skipped)
    pub fn from_env_args() -> Result<Self, ConfigError> {
        Self::from_args(env::args_os().skip(1))
    }

    /// Load configuration from positional arguments (for testing)
    ///
    /// The first argument is the secret, taken as raw bytes. An empty first
    /// argument counts as missing. Anything after it is ignored.
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);

        let secret = args
            .next()
            .filter(|arg| !arg.is_empty())
            .ok_or(ConfigError::MissingSecret)?;

        let ignored = args.count();
        if ignored > 0 {
            debug!(
                target: "token_issuer.config",
                ignored,
                "Ignoring extra positional arguments"
            );
        }

        Ok(Config {
            secret: SigningSecret::new(secret.into_encoded_bytes()),
            expiry_years: DEFAULT_EXPIRY_YEARS,
            roles: DEFAULT_ROLES.iter().map(ToString::to_string).collect(),
        })
    }
}
