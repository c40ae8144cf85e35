pub mod credentials;

pub use credentials::CredentialEngine;
