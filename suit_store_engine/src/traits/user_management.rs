use thiserror::Error;

use crate::db_types::{LoginRecord, NewUser};

#[derive(Debug, Clone, Error)]
pub enum UserApiError {
    #[error("A user with email {0} already exists")]
    EmailTaken(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for UserApiError {
    fn from(e: sqlx::Error) -> Self {
        UserApiError::DatabaseError(e.to_string())
    }
}

/// Creation and lookup of login records.
#[allow(async_fn_in_trait)]
pub trait UserManagement {
    /// Inserts a new login record and returns its id.
    ///
    /// Uniqueness of the email column is enforced by the database itself. A duplicate email must fail the insert
    /// atomically and surface as [`UserApiError::EmailTaken`]; implementations must not use a read-then-write
    /// existence check, which is racy under concurrent registrations.
    async fn create_user(&self, user: NewUser) -> Result<i64, UserApiError>;

    /// Fetches the login record for `email`, or `None` if no user has registered with that address.
    async fn fetch_user_by_email(&self, email: &str) -> Result<Option<LoginRecord>, UserApiError>;
}
