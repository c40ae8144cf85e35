/// gRPC server implementation for credential-service
///
/// Thin passthrough over the credential engine and token issuer:
/// - Register: create an account, return its public projection
/// - Login: authenticate, return a signed access token
///
/// Input shape validation lives here, at the transport boundary; the
/// engine below treats email and password as opaque strings.
use crate::services::CredentialEngine;
use crate::store::AccountStore;
use crate::token::TokenIssuer;
use chrono::Utc;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::warn;

// Import generated protobuf types
pub mod credmesh {
    pub mod credential_service {
        tonic::include_proto!("credmesh.credential_service");
    }
}

use credmesh::credential_service::credential_service_server::CredentialService;
use credmesh::credential_service::{
    Account, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};

/// Credential service gRPC server
pub struct CredentialServer<S: AccountStore> {
    engine: Arc<CredentialEngine<S>>,
    issuer: TokenIssuer,
}

impl<S: AccountStore> CredentialServer<S> {
    pub fn new(engine: Arc<CredentialEngine<S>>, issuer: TokenIssuer) -> Self {
        Self { engine, issuer }
    }
}

#[tonic::async_trait]
impl<S: AccountStore + 'static> CredentialService for CredentialServer<S> {
    /// Register a new account with email and password
    async fn register(
        &self,
        request: Request<RegisterRequest>,
    ) -> std::result::Result<Response<RegisterResponse>, Status> {
        let req = request.into_inner();

        if req.email.is_empty() {
            return Err(Status::invalid_argument("email is required"));
        }
        if req.password.is_empty() {
            return Err(Status::invalid_argument("password is required"));
        }

        let account = self
            .engine
            .register(&req.email, &req.password)
            .await
            .map_err(Status::from)?;

        Ok(Response::new(RegisterResponse {
            account: Some(Account {
                id: account.id.to_string(),
                email: account.email,
                role: account.role,
            }),
        }))
    }

    /// Authenticate and mint a signed access token
    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> std::result::Result<Response<LoginResponse>, Status> {
        let req = request.into_inner();

        let account = self
            .engine
            .login(&req.email, &req.password)
            .await
            .map_err(Status::from)?;

        let access_token = self.issuer.issue(&account, Utc::now()).map_err(|err| {
            warn!(account_id = %account.id, "token issuance failed after login");
            err.to_status()
        })?;

        Ok(Response::new(LoginResponse { access_token }))
    }
}
