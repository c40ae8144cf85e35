use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Role assigned to every account at registration. Registration is the
/// only account-creation path and it never accepts a caller-supplied
/// role, so this is the only value the column ever holds today.
pub const DEFAULT_ROLE: &str = "CUSTOMER";

/// Account model - persisted identity record
///
/// `password_hash` stays inside the service: it is read by the engine
/// for verification and written by the store, and is excluded from
/// serialized output.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}
