use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// User account row in the `user_info` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    #[sqlx(rename = "fname")]
    pub name: String,
    #[sqlx(rename = "lname")]
    pub surname: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: Vec<u8>, // opaque salted hash, not exposed in JSON
    /// Transient plaintext set by the caller before hashing; never bound
    /// in SQL and never serialized.
    #[sqlx(default)]
    #[serde(skip)]
    pub password: Option<String>,
    #[sqlx(rename = "user_role")]
    pub role: String,
    pub activated: bool,
    pub version: i32,
}

impl User {
    /// Build a user ready for insertion. Identity fields (`id`,
    /// `created_at`, `version`) are assigned by the database on insert.
    pub fn new(name: &str, surname: &str, email: &str, password_hash: Vec<u8>) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: 0,
            created_at: now,
            updated_at: now,
            name: name.to_string(),
            surname: surname.to_string(),
            email: email.to_string(),
            password_hash,
            password: None,
            role: "user".to_string(),
            activated: false,
            version: 0,
        }
    }
}
