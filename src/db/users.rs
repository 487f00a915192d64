use super::DB;
use crate::models::user::User;

/// Inserts a user and returns the new row id.
///
/// Duplicate usernames surface as the store's unique-violation error. Callers
/// check for that rather than doing a racy pre-read.
pub async fn insert(db: &DB, username: &str, password_hash: &str) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
        .bind(username)
        .bind(password_hash)
        .execute(db)
        .await?;

    Ok(result.last_insert_rowid())
}

pub async fn find_by_username(db: &DB, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, username, password FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(db)
        .await
}
