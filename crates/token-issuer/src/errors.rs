use common::error::TokenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IssuerError {
    #[error("Token encoding failed: {0}")]
    Token(#[from] TokenError),

    #[error("Failed to write tokens: {0}")]
    Output(#[from] std::io::Error),
}
