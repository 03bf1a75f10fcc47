/**
 * Post Model and Database Operations
 *
 * Blog posts. Created and mutated only through the admin handlers; the
 * author and the display date are fixed at creation time, and updates touch
 * title, subtitle, body and image URL only. Deleting a post removes its
 * comments in the same transaction.
 */

use serde::Serialize;
use sqlx::SqlitePool;

/// A blog post.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub subtitle: String,
    /// Display date, e.g. "August 25, 2026", set at creation and immutable
    pub date: String,
    pub body: String,
    pub img_url: String,
}

/// Mutable fields of a post, shared by create and edit.
#[derive(Debug, Clone)]
pub struct PostContent {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub img_url: String,
}

/// Insert a new post and return the stored row.
pub async fn create_post(
    pool: &SqlitePool,
    author_id: i64,
    date: &str,
    content: &PostContent,
) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (author_id, title, subtitle, date, body, img_url)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, author_id, title, subtitle, date, body, img_url
        "#,
    )
    .bind(author_id)
    .bind(&content.title)
    .bind(&content.subtitle)
    .bind(date)
    .bind(&content.body)
    .bind(&content.img_url)
    .fetch_one(pool)
    .await
}

/// All posts in insertion order.
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, author_id, title, subtitle, date, body, img_url
        FROM posts
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Look up a post by id.
pub async fn get_post_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, author_id, title, subtitle, date, body, img_url
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Overwrite the mutable fields of a post. Author and date are untouched.
///
/// Returns the updated row, or `None` if the post does not exist.
pub async fn update_post(
    pool: &SqlitePool,
    id: i64,
    content: &PostContent,
) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = $1, subtitle = $2, body = $3, img_url = $4
        WHERE id = $5
        RETURNING id, author_id, title, subtitle, date, body, img_url
        "#,
    )
    .bind(&content.title)
    .bind(&content.subtitle)
    .bind(&content.body)
    .bind(&content.img_url)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a post and its comments in one transaction.
///
/// Returns `true` if a post was deleted.
pub async fn delete_post(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM comments WHERE post_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::comments::{create_comment, list_comments_for_post};
    use crate::store::test_pool;
    use crate::store::users::create_user;

    fn content(title: &str) -> PostContent {
        PostContent {
            title: title.to_string(),
            subtitle: "A subtitle".to_string(),
            body: "<p>Body</p>".to_string(),
            img_url: "https://example.com/img.png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_read_back_identical_fields() {
        let pool = test_pool().await;
        let author = create_user(&pool, "a@x.com", "$h", "Alice").await.unwrap();

        let created = create_post(&pool, author.id, "August 25, 2026", &content("T"))
            .await
            .unwrap();
        let fetched = get_post_by_id(&pool, created.id).await.unwrap().unwrap();

        assert_eq!(fetched.title, created.title);
        assert_eq!(fetched.subtitle, created.subtitle);
        assert_eq!(fetched.date, "August 25, 2026");
        assert_eq!(fetched.body, created.body);
        assert_eq!(fetched.img_url, created.img_url);
        assert_eq!(fetched.author_id, author.id);
    }

    #[tokio::test]
    async fn test_list_posts_is_insertion_order() {
        let pool = test_pool().await;
        let author = create_user(&pool, "a@x.com", "$h", "Alice").await.unwrap();

        create_post(&pool, author.id, "d", &content("First")).await.unwrap();
        create_post(&pool, author.id, "d", &content("Second")).await.unwrap();

        let titles: Vec<String> = list_posts(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_title_is_unique() {
        let pool = test_pool().await;
        let author = create_user(&pool, "a@x.com", "$h", "Alice").await.unwrap();

        create_post(&pool, author.id, "d", &content("Same")).await.unwrap();
        assert!(create_post(&pool, author.id, "d", &content("Same")).await.is_err());
    }

    #[tokio::test]
    async fn test_update_leaves_author_and_date_unchanged() {
        let pool = test_pool().await;
        let author = create_user(&pool, "a@x.com", "$h", "Alice").await.unwrap();
        let post = create_post(&pool, author.id, "August 25, 2026", &content("T"))
            .await
            .unwrap();

        let updated = update_post(&pool, post.id, &content("T2"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "T2");
        assert_eq!(updated.author_id, author.id);
        assert_eq!(updated.date, "August 25, 2026");
    }

    #[tokio::test]
    async fn test_update_unknown_post_returns_none() {
        let pool = test_pool().await;
        assert!(update_post(&pool, 999, &content("T")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_post_and_comments() {
        let pool = test_pool().await;
        let author = create_user(&pool, "a@x.com", "$h", "Alice").await.unwrap();
        let post = create_post(&pool, author.id, "d", &content("T")).await.unwrap();
        create_comment(&pool, author.id, post.id, "Nice post").await.unwrap();

        assert!(delete_post(&pool, post.id).await.unwrap());

        assert!(get_post_by_id(&pool, post.id).await.unwrap().is_none());
        assert!(list_posts(&pool).await.unwrap().is_empty());
        assert!(list_comments_for_post(&pool, post.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_post_returns_false() {
        let pool = test_pool().await;
        assert!(!delete_post(&pool, 999).await.unwrap());
    }
}
