use crate::db::comment_repo;
use crate::error::Result;
use crate::models::Comment;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Business logic for comment operations.
///
/// Every lookup is scoped to a post: a comment id paired with the wrong
/// post id does not resolve. Whether the post itself exists is checked by
/// the handlers, not here.
pub struct CommentService {
    pool: SqlitePool,
}

impl CommentService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All comments on a post, oldest first
    pub async fn list_comments(&self, post_id: Uuid) -> Result<Vec<Comment>> {
        let comments = comment_repo::find_comments_by_post(&self.pool, post_id).await?;
        Ok(comments)
    }

    /// Fetch a comment scoped to its post
    pub async fn get_comment(&self, post_id: Uuid, comment_id: Uuid) -> Result<Option<Comment>> {
        let comment = comment_repo::find_comment_scoped(&self.pool, post_id, comment_id).await?;
        Ok(comment)
    }

    /// Create a comment with a server-assigned id and timestamps
    pub async fn create_comment(
        &self,
        post_id: Uuid,
        username: &str,
        content: &str,
    ) -> Result<Comment> {
        let now = Utc::now();
        let comment = Comment {
            id: Uuid::new_v4(),
            post_id,
            username: username.to_string(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };

        let mut tx = self.pool.begin().await?;
        sqlx::query(
            r#"
            INSERT INTO comments (id, post_id, username, content, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(comment.id)
        .bind(comment.post_id)
        .bind(&comment.username)
        .bind(&comment.content)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        tracing::info!(post_id = %post_id, comment_id = %comment.id, "comment created");

        Ok(comment)
    }

    /// Overwrite username and content and refresh updated_at, scoped to the
    /// post. Returns None when the scoping does not match.
    pub async fn update_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        username: &str,
        content: &str,
    ) -> Result<Option<Comment>> {
        let mut tx = self.pool.begin().await?;

        let comment = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, username, content, created_at, updated_at
            FROM comments
            WHERE id = ? AND post_id = ?
            "#,
        )
        .bind(comment_id)
        .bind(post_id)
        .fetch_optional(&mut *tx)
        .await?;

        let mut comment = match comment {
            Some(comment) => comment,
            None => return Ok(None),
        };

        comment.username = username.to_string();
        comment.content = content.to_string();
        comment.updated_at = Utc::now();

        sqlx::query(
            r#"
            UPDATE comments
            SET username = ?, content = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&comment.username)
        .bind(&comment.content)
        .bind(comment.updated_at)
        .bind(comment.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(comment))
    }

    /// Delete a comment scoped to the post; reports whether a row was removed
    pub async fn delete_comment(&self, post_id: Uuid, comment_id: Uuid) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM comments WHERE id = ? AND post_id = ?"#)
            .bind(comment_id)
            .bind(post_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
