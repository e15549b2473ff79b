use sqlx::SqlitePool;
use uuid::Uuid;

/// Number of likes on a post
pub async fn count_likes_by_post(pool: &SqlitePool, post_id: Uuid) -> Result<i64, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM likes WHERE post_id = ?"#)
        .bind(post_id)
        .fetch_one(pool)
        .await?;

    Ok(count)
}
