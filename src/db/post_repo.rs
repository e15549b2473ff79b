use crate::models::{Post, PostResponse};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Find a post by id
pub async fn find_post_by_id(pool: &SqlitePool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, username, content, created_at, updated_at
        FROM posts
        WHERE id = ?
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// List every post, newest first, annotated with like/comment counts.
/// Equal timestamps are tiebroken on rowid so the order stays deterministic.
pub async fn find_all_with_counts(pool: &SqlitePool) -> Result<Vec<PostResponse>, sqlx::Error> {
    let posts = sqlx::query_as::<_, PostResponse>(
        r#"
        SELECT p.id, p.username, p.content, p.created_at, p.updated_at,
               (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS likes_count,
               (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comments_count
        FROM posts p
        ORDER BY p.created_at DESC, p.rowid DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Existence predicate; the comment and like handlers gate on this
pub async fn post_exists(pool: &SqlitePool, post_id: Uuid) -> Result<bool, sqlx::Error> {
    let exists: bool = sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM posts WHERE id = ?)"#)
        .bind(post_id)
        .fetch_one(pool)
        .await?;

    Ok(exists)
}
