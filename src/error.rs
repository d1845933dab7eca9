use thiserror::Error;

/// Typed errors returned by the data-access models.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("record not found")]
    RecordNotFound,

    #[error("edit conflict")]
    EditConflict,

    #[error("duplicate email")]
    DuplicateEmail,

    #[error("operation deadline exceeded")]
    DeadlineExceeded,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ModelError {
    /// Classify an error from a write against `user_info`: a unique
    /// violation on the email constraint becomes `DuplicateEmail`.
    pub(crate) fn from_user_write(err: sqlx::Error) -> Self {
        if is_unique_violation(&err, "user_info_email_key") {
            return ModelError::DuplicateEmail;
        }
        ModelError::Database(err)
    }
}

/// True when `err` is a Postgres unique violation (SQLSTATE 23505) on
/// the named constraint.
fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db) => {
            db.code().as_deref() == Some("23505") && db.constraint() == Some(constraint)
        }
        _ => false,
    }
}
