/// Credential engine: account creation and authentication decisions
///
/// Sole holder of the hashing policy. Stateless apart from the shared
/// store handle, so concurrent calls need no coordination beyond the
/// store's own guarantees (the unique email constraint resolves
/// registration races).
use crate::error::{CredentialError, Result};
use crate::models::Account;
use crate::security::{hash_password, verify_password};
use crate::store::AccountStore;
use std::sync::Arc;
use tracing::{info, warn};

pub struct CredentialEngine<S: AccountStore> {
    store: Arc<S>,
}

impl<S: AccountStore> CredentialEngine<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Register a new account.
    ///
    /// The plaintext is hashed with a salted, adaptive-cost function
    /// and discarded; only the hash reaches the store. The store
    /// assigns the id and the role: registration is the only
    /// account-creation path and it takes no role input, which is what
    /// keeps callers from granting themselves anything beyond the
    /// default.
    pub async fn register(&self, email: &str, password: &str) -> Result<Account> {
        let password_hash = hash_password(password)?;

        let account = self.store.create_account(email, &password_hash).await?;

        info!(account_id = %account.id, "account registered");
        Ok(account)
    }

    /// Authenticate an account by email and password.
    ///
    /// Unknown email, store failure and password mismatch all return
    /// the same `InvalidCredentials` value. The paths diverge only in
    /// the logs below; nothing distinguishable leaves this function.
    pub async fn login(&self, email: &str, password: &str) -> Result<Account> {
        let account = match self.store.find_by_email(email).await {
            Ok(Some(account)) => account,
            Ok(None) => {
                warn!("login attempt for unknown email");
                return Err(CredentialError::InvalidCredentials);
            }
            Err(err) => {
                warn!(error = %err, "account lookup failed during login");
                return Err(CredentialError::InvalidCredentials);
            }
        };

        if !verify_password(password, &account.password_hash)? {
            warn!(account_id = %account.id, "password mismatch");
            return Err(CredentialError::InvalidCredentials);
        }

        info!(account_id = %account.id, "login verified");
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_ROLE;
    use crate::store::{MockAccountStore, StoreError};
    use chrono::Utc;
    use uuid::Uuid;

    fn stored_account(email: &str, password: &str) -> Account {
        Account {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: hash_password(password).unwrap(),
            role: DEFAULT_ROLE.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_persists_hash_not_plaintext() {
        let mut store = MockAccountStore::new();
        store
            .expect_create_account()
            .withf(|email, hash| {
                email == "a@x.com" && hash != "pw1" && hash.starts_with("$argon2")
            })
            .returning(|email, hash| {
                let email = email.to_string();
                let hash = hash.to_string();
                Ok(Account {
                    id: Uuid::new_v4(),
                    email,
                    password_hash: hash,
                    role: DEFAULT_ROLE.to_string(),
                    created_at: Utc::now(),
                })
            });

        let engine = CredentialEngine::new(Arc::new(store));
        let account = engine.register("a@x.com", "pw1").await.unwrap();

        assert_eq!(account.email, "a@x.com");
        assert_eq!(account.role, DEFAULT_ROLE);
        assert!(verify_password("pw1", &account.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_register_surfaces_duplicate_email() {
        let mut store = MockAccountStore::new();
        store
            .expect_create_account()
            .returning(|_, _| Err(StoreError::Duplicate));

        let engine = CredentialEngine::new(Arc::new(store));
        let err = engine.register("a@x.com", "pw1").await.unwrap_err();

        assert!(matches!(
            err,
            CredentialError::Store(StoreError::Duplicate)
        ));
    }

    #[tokio::test]
    async fn test_login_round_trip_after_register() {
        let account = stored_account("a@x.com", "pw1");
        let returned = account.clone();

        let mut store = MockAccountStore::new();
        store
            .expect_find_by_email()
            .returning(move |_| Ok(Some(returned.clone())));

        let engine = CredentialEngine::new(Arc::new(store));
        let logged_in = engine.login("a@x.com", "pw1").await.unwrap();

        assert_eq!(logged_in.id, account.id);
        assert_eq!(logged_in.email, "a@x.com");
        assert_eq!(logged_in.role, DEFAULT_ROLE);
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_are_indistinguishable() {
        let mut unknown_store = MockAccountStore::new();
        unknown_store.expect_find_by_email().returning(|_| Ok(None));
        let unknown = CredentialEngine::new(Arc::new(unknown_store))
            .login("nobody@x.com", "pw1")
            .await
            .unwrap_err();

        let account = stored_account("a@x.com", "pw1");
        let mut mismatch_store = MockAccountStore::new();
        mismatch_store
            .expect_find_by_email()
            .returning(move |_| Ok(Some(account.clone())));
        let mismatch = CredentialEngine::new(Arc::new(mismatch_store))
            .login("a@x.com", "wrong")
            .await
            .unwrap_err();

        assert!(matches!(unknown, CredentialError::InvalidCredentials));
        assert!(matches!(mismatch, CredentialError::InvalidCredentials));
        assert_eq!(unknown.to_string(), mismatch.to_string());
    }

    #[tokio::test]
    async fn test_store_failure_during_login_collapses_to_invalid_credentials() {
        let mut store = MockAccountStore::new();
        store
            .expect_find_by_email()
            .returning(|_| Err(StoreError::Backend("connection reset".to_string())));

        let engine = CredentialEngine::new(Arc::new(store));
        let err = engine.login("a@x.com", "pw1").await.unwrap_err();

        assert!(matches!(err, CredentialError::InvalidCredentials));
    }
}
