use log::debug;
use sqlx::SqliteConnection;

use crate::{
    db_types::{LoginRecord, NewUser},
    traits::UserApiError,
};

/// Inserts a new login record and returns its id.
///
/// The UNIQUE index on `login.email` is the sole authority on duplicates. A violation fails the insert atomically
/// and is reported as [`UserApiError::EmailTaken`]; there is deliberately no preceding existence check.
pub async fn insert_user(user: NewUser, conn: &mut SqliteConnection) -> Result<i64, UserApiError> {
    let result: Result<i64, sqlx::Error> = sqlx::query_scalar(
        r#"
            INSERT INTO login (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id;
        "#,
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .fetch_one(conn)
    .await;
    match result {
        Ok(id) => {
            debug!("🧑️ New login record {id} created");
            Ok(id)
        },
        Err(sqlx::Error::Database(de)) if de.is_unique_violation() => Err(UserApiError::EmailTaken(user.email)),
        Err(e) => Err(e.into()),
    }
}

pub async fn fetch_user_by_email(
    email: &str,
    conn: &mut SqliteConnection,
) -> Result<Option<LoginRecord>, UserApiError> {
    let user = sqlx::query_as("SELECT * FROM login WHERE email = $1").bind(email).fetch_optional(conn).await?;
    Ok(user)
}
