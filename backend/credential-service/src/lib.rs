/// Credential Service Library
///
/// Issues and verifies user credentials for the service mesh: account
/// registration, password-based login, and signed time-bound access
/// tokens.
///
/// ## Modules
///
/// - `config`: Service configuration
/// - `error`: Error types
/// - `grpc`: gRPC server implementation
/// - `models`: Data models
/// - `security`: Password hashing
/// - `services`: Credential engine (register/login decisions)
/// - `store`: Account persistence seam and Postgres implementation
/// - `token`: Access-token issuer
pub mod config;
pub mod error;
pub mod grpc;
pub mod models;
pub mod security;
pub mod services;
pub mod store;
pub mod token;

// Re-export commonly used types
pub use error::{CredentialError, Result};
pub use grpc::CredentialServer;
