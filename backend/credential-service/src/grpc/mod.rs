/// gRPC server module for credential-service
///
/// Exports:
/// - CredentialServer: gRPC service implementation
/// - credmesh: generated protobuf types from credential_service.proto
pub mod server;

pub use server::credmesh;
pub use server::CredentialServer;
