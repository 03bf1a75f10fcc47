/**
 * Comment Model and Database Operations
 *
 * Comments belong to exactly one post and one user. They are created from
 * the post page by authenticated users and never edited or deleted on their
 * own; they disappear with their post.
 */

use serde::Serialize;
use sqlx::SqlitePool;

/// A comment row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub author_id: i64,
    pub post_id: i64,
    pub text: String,
}

/// A comment joined with its author's name, for rendering.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CommentView {
    pub id: i64,
    pub text: String,
    pub author_name: String,
}

/// Insert a new comment and return the stored row.
pub async fn create_comment(
    pool: &SqlitePool,
    author_id: i64,
    post_id: i64,
    text: &str,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (author_id, post_id, text)
        VALUES ($1, $2, $3)
        RETURNING id, author_id, post_id, text
        "#,
    )
    .bind(author_id)
    .bind(post_id)
    .bind(text)
    .fetch_one(pool)
    .await
}

/// All comments on a post, oldest first, with author names.
pub async fn list_comments_for_post(
    pool: &SqlitePool,
    post_id: i64,
) -> Result<Vec<CommentView>, sqlx::Error> {
    sqlx::query_as::<_, CommentView>(
        r#"
        SELECT comments.id, comments.text, users.name AS author_name
        FROM comments
        JOIN users ON users.id = comments.author_id
        WHERE comments.post_id = $1
        ORDER BY comments.id
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}
