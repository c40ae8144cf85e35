use crate::store::StoreError;
use thiserror::Error;
use tonic::{Code, Status};

pub type Result<T> = std::result::Result<T, CredentialError>;

#[derive(Debug, Error)]
pub enum CredentialError {
    /// Single error kind for every login failure. Unknown email, store
    /// read failure and password mismatch all collapse into this so
    /// callers cannot enumerate accounts by distinguishing causes.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token signing failed: {0}")]
    Signing(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl CredentialError {
    /// Convert to gRPC Status for the wire protocol
    pub fn to_status(&self) -> Status {
        match self {
            CredentialError::InvalidCredentials => {
                Status::new(Code::Unauthenticated, "Invalid credentials")
            }
            CredentialError::Hashing(_)
            | CredentialError::Signing(_)
            | CredentialError::Store(_) => {
                // Don't leak internal details on the wire
                Status::new(Code::Internal, "Internal server error")
            }
        }
    }
}

impl From<jsonwebtoken::errors::Error> for CredentialError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        tracing::error!("JWT signing error: {}", err);
        CredentialError::Signing(err.to_string())
    }
}

impl From<CredentialError> for Status {
    fn from(err: CredentialError) -> Self {
        err.to_status()
    }
}
