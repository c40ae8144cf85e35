/// Access-token issuance
///
/// Builds and signs the time-bound JWT handed out on successful login.
/// The issuer holds no state beyond the signing key, performs no I/O,
/// and is never involved in verifying tokens: relying services verify
/// on their side with the shared secret.
use crate::error::Result;
use crate::models::Account;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

/// Fixed token lifetime. Not configurable: every consumer in the mesh
/// assumes this window.
const ACCESS_TOKEN_EXPIRY_HOURS: i64 = 24;

/// JWT claims carried by an access token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (account ID as UUID string)
    pub sub: String,
    /// Role label copied from the account
    pub role: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signs access tokens with the process-wide shared secret (HS256).
///
/// Constructed once at startup; the key is immutable afterwards.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
}

impl TokenIssuer {
    pub fn new(signing_secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(signing_secret.as_bytes()),
        }
    }

    /// Sign a token asserting the given authenticated account.
    ///
    /// `now` is taken as an argument rather than read from the clock
    /// so issuance stays a pure function of its inputs.
    pub fn issue(&self, account: &Account, now: DateTime<Utc>) -> Result<String> {
        let claims = Claims {
            sub: account.id.to_string(),
            role: account.role.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(ACCESS_TOKEN_EXPIRY_HOURS)).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_ROLE;
    use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
    use uuid::Uuid;

    fn test_account() -> Account {
        Account {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            password_hash: "unused".to_string(),
            role: DEFAULT_ROLE.to_string(),
            created_at: Utc::now(),
        }
    }

    fn decode_claims(token: &str, secret: &str) -> jsonwebtoken::errors::Result<Claims> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
    }

    #[test]
    fn test_claims_carry_subject_role_and_24h_expiry() {
        let issuer = TokenIssuer::new("secret");
        let account = test_account();
        let now = Utc::now();

        let token = issuer.issue(&account, now).expect("should sign token");
        let claims = decode_claims(&token, "secret").expect("should decode with right secret");

        assert_eq!(claims.sub, account.id.to_string());
        assert_eq!(claims.role, DEFAULT_ROLE);
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp, now.timestamp() + 24 * 3600);
    }

    #[test]
    fn test_wrong_secret_fails_signature_verification() {
        let issuer = TokenIssuer::new("secret");
        let token = issuer
            .issue(&test_account(), Utc::now())
            .expect("should sign token");

        let err = decode_claims(&token, "other-secret").expect_err("wrong secret must fail");
        assert!(matches!(
            err.kind(),
            jsonwebtoken::errors::ErrorKind::InvalidSignature
        ));
    }

    #[test]
    fn test_tokens_are_self_contained_strings() {
        let issuer = TokenIssuer::new("secret");
        let token = issuer
            .issue(&test_account(), Utc::now())
            .expect("should sign token");

        // header.payload.signature
        assert_eq!(token.split('.').count(), 3);
    }
}
