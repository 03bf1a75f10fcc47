/**
 * User Model and Database Operations
 *
 * Registered accounts. Users are created on registration and never edited or
 * deleted elsewhere; the `email` column carries a UNIQUE constraint which is
 * the authoritative guard against duplicate registration (the handler-level
 * lookup is only a best-effort pre-check).
 */

use serde::Serialize;
use sqlx::SqlitePool;

/// A registered account.
///
/// The password hash never leaves the server: it is skipped when the user is
/// serialized into a page context.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
}

/// Insert a new user and return the stored row.
///
/// Fails with a unique-violation database error if the email is already
/// registered.
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
    name: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash, name)
        VALUES ($1, $2, $3)
        RETURNING id, email, password_hash, name
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(name)
    .fetch_one(pool)
    .await
}

/// Look up a user by email.
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Look up a user by id.
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Whether a database error is a uniqueness-constraint violation.
///
/// Used by registration to treat a lost insert race the same as the
/// pre-check catching the duplicate.
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_pool;

    #[tokio::test]
    async fn test_create_and_fetch_user() {
        let pool = test_pool().await;

        let user = create_user(&pool, "a@x.com", "$hash", "Alice").await.unwrap();
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.name, "Alice");

        let by_id = get_user_by_id(&pool, user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "a@x.com");

        let by_email = get_user_by_email(&pool, "a@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, user.id);
    }

    #[tokio::test]
    async fn test_first_user_gets_id_one() {
        let pool = test_pool().await;
        let user = create_user(&pool, "admin@x.com", "$hash", "Admin").await.unwrap();
        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected_by_constraint() {
        let pool = test_pool().await;
        create_user(&pool, "a@x.com", "$hash", "Alice").await.unwrap();

        let error = create_user(&pool, "a@x.com", "$hash2", "Alice again")
            .await
            .unwrap_err();
        assert!(is_unique_violation(&error));
    }

    #[tokio::test]
    async fn test_unknown_email_returns_none() {
        let pool = test_pool().await;
        assert!(get_user_by_email(&pool, "nobody@x.com").await.unwrap().is_none());
    }
}
