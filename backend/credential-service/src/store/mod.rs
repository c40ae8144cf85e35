/// Persistence seam for account records
///
/// The engine only ever talks to this trait; the Postgres
/// implementation lives in `postgres`. Not-found is modeled as
/// `Ok(None)` and only exists at this layer: the engine collapses it
/// with every other login failure before anything reaches a caller.
pub mod postgres;

use crate::models::Account;
use async_trait::async_trait;
use thiserror::Error;

pub use postgres::PgAccountStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique-constraint violation on email
    #[error("email already registered")]
    Duplicate,

    #[error("database error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", err);
        StoreError::Backend(err.to_string())
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new account. The store generates the id and fixes the
    /// role; callers supply only the email and the password hash.
    async fn create_account(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Account, StoreError>;

    /// Look up an account by email. `Ok(None)` means no such account.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;
}
