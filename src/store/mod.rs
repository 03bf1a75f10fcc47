//! Data Store
//!
//! Three related tables behind plain query functions:
//!
//! - **`users`** - registered accounts, unique by email
//! - **`posts`** - blog posts, unique by title, owned by a user
//! - **`comments`** - comments, owned by a user and a post
//!
//! Model structs live next to their queries. The schema is created
//! idempotently at connect time; there is no migration framework.

pub mod comments;
pub mod posts;
pub mod users;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Open a SQLite pool and ensure the schema exists.
///
/// Foreign key enforcement is switched on per connection; SQLite leaves it
/// off by default. In-memory databases get a single-connection pool, since
/// every new connection to `:memory:` would otherwise see a fresh empty
/// database.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;

    Ok(pool)
}

/// Create the three tables if they do not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            email         TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            name          TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            author_id INTEGER NOT NULL REFERENCES users(id),
            title     TEXT NOT NULL UNIQUE,
            subtitle  TEXT NOT NULL,
            date      TEXT NOT NULL,
            body      TEXT NOT NULL,
            img_url   TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            author_id INTEGER NOT NULL REFERENCES users(id),
            post_id   INTEGER NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
            text      TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    connect("sqlite::memory:").await.expect("in-memory pool")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_init_is_idempotent() {
        let pool = test_pool().await;
        init_schema(&pool).await.unwrap();
        init_schema(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_foreign_keys_are_enforced() {
        let pool = test_pool().await;
        let result = sqlx::query("INSERT INTO posts (author_id, title, subtitle, date, body, img_url) VALUES (999, 't', 's', 'd', 'b', 'u')")
            .execute(&pool)
            .await;
        assert!(result.is_err());
    }
}
