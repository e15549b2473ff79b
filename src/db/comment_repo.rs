use crate::models::Comment;
use sqlx::SqlitePool;
use uuid::Uuid;

/// All comments for a post, oldest first
pub async fn find_comments_by_post(
    pool: &SqlitePool,
    post_id: Uuid,
) -> Result<Vec<Comment>, sqlx::Error> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, username, content, created_at, updated_at
        FROM comments
        WHERE post_id = ?
        ORDER BY created_at ASC, rowid ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Find a comment only when it belongs to the given post
pub async fn find_comment_scoped(
    pool: &SqlitePool,
    post_id: Uuid,
    comment_id: Uuid,
) -> Result<Option<Comment>, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, username, content, created_at, updated_at
        FROM comments
        WHERE id = ? AND post_id = ?
        "#,
    )
    .bind(comment_id)
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(comment)
}

/// Number of comments on a post
pub async fn count_comments_by_post(pool: &SqlitePool, post_id: Uuid) -> Result<i64, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM comments WHERE post_id = ?"#)
        .bind(post_id)
        .fetch_one(pool)
        .await?;

    Ok(count)
}
