use crate::error::Result;
use crate::models::Like;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Outcome of a like attempt. A duplicate like is a domain outcome, not an
/// error, and is distinct from the post not existing.
#[derive(Debug)]
pub enum LikeOutcome {
    Liked(Like),
    AlreadyLiked,
}

/// Business logic for like operations
pub struct LikeService {
    pool: SqlitePool,
}

impl LikeService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Like a post on behalf of a username. At most one like per
    /// (post, username) pair.
    ///
    /// The duplicate check and the insert share one transaction, but no row
    /// lock is taken: two concurrent attempts for the same pair can both pass
    /// the check and both commit. Known limitation.
    pub async fn like_post(&self, post_id: Uuid, username: &str) -> Result<LikeOutcome> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, Like>(
            r#"
            SELECT id, post_id, username, created_at
            FROM likes
            WHERE post_id = ? AND username = ?
            "#,
        )
        .bind(post_id)
        .bind(username)
        .fetch_optional(&mut *tx)
        .await?;

        if existing.is_some() {
            return Ok(LikeOutcome::AlreadyLiked);
        }

        let like = Like {
            id: Uuid::new_v4(),
            post_id,
            username: username.to_string(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO likes (id, post_id, username, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(like.id)
        .bind(like.post_id)
        .bind(&like.username)
        .bind(like.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(post_id = %post_id, username = %username, "post liked");

        Ok(LikeOutcome::Liked(like))
    }

    /// Remove every like from a post, whoever created them. There is no
    /// caller identity to target a single like. Succeeds even when the post
    /// had no likes.
    pub async fn unlike_post(&self, post_id: Uuid) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM likes WHERE post_id = ?"#)
            .bind(post_id)
            .execute(&self.pool)
            .await?;

        tracing::info!(
            post_id = %post_id,
            removed = result.rows_affected(),
            "post unliked"
        );

        Ok(())
    }
}
