use std::fmt::Debug;

use log::debug;
use thiserror::Error;

use crate::{
    db_types::{NewUser, UserProfile},
    helpers::{hash_password, verify_password},
    traits::{UserApiError, UserManagement},
};

#[derive(Debug, Clone, Error)]
pub enum AccountError {
    #[error("A user with email {0} already exists")]
    EmailTaken(String),
    #[error("No user is registered with that email address")]
    UserNotFound,
    #[error("Email and password do not match")]
    InvalidCredentials,
    #[error("Could not hash the password: {0}")]
    PasswordHash(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<UserApiError> for AccountError {
    fn from(e: UserApiError) -> Self {
        match e {
            UserApiError::EmailTaken(email) => AccountError::EmailTaken(email),
            UserApiError::DatabaseError(e) => AccountError::DatabaseError(e),
        }
    }
}

/// The `AccountApi` provides registration and authentication on top of a [`UserManagement`] backend.
pub struct AccountApi<B> {
    db: B,
}

impl<B: Debug> Debug for AccountApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccountApi ({:?})", self.db)
    }
}

impl<B> AccountApi<B>
where B: UserManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Registers a new user and returns the new record's id.
    ///
    /// The password is hashed (Argon2, salted) before it goes anywhere near the database; the raw password is
    /// never persisted. Duplicate emails fail atomically on the backend's unique index and surface as
    /// [`AccountError::EmailTaken`].
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<i64, AccountError> {
        let password_hash = hash_password(password).map_err(|e| AccountError::PasswordHash(e.to_string()))?;
        let user = NewUser { name: name.to_string(), email: email.to_string(), password_hash };
        let id = self.db.create_user(user).await?;
        debug!("🧑️ Registered new user {id} ({email})");
        Ok(id)
    }

    /// Authenticates a user by email and password.
    ///
    /// An unknown email yields [`AccountError::UserNotFound`]; a hash mismatch yields
    /// [`AccountError::InvalidCredentials`]. On success the sanitized profile is returned -- never the hash.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<UserProfile, AccountError> {
        let user = self.db.fetch_user_by_email(email).await?.ok_or(AccountError::UserNotFound)?;
        if verify_password(password, &user.password) {
            Ok(UserProfile::from(user))
        } else {
            Err(AccountError::InvalidCredentials)
        }
    }
}
