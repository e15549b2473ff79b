use crate::db::{comment_repo, like_repo, post_repo};
use crate::error::Result;
use crate::models::{Post, PostResponse};
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Business logic for post operations
pub struct PostService {
    pool: SqlitePool,
}

impl PostService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every post, newest first, with current counts. No pagination.
    pub async fn list_posts(&self) -> Result<Vec<PostResponse>> {
        let posts = post_repo::find_all_with_counts(&self.pool).await?;
        Ok(posts)
    }

    /// Create a post with a server-assigned id and timestamps.
    /// Client-supplied ids or timestamps are never accepted.
    pub async fn create_post(&self, username: &str, content: &str) -> Result<PostResponse> {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            username: username.to_string(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };

        let mut tx = self.pool.begin().await?;
        sqlx::query(
            r#"
            INSERT INTO posts (id, username, content, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(post.id)
        .bind(&post.username)
        .bind(&post.content)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        tracing::info!(post_id = %post.id, "post created");

        Ok(PostResponse::from_post(post, 0, 0))
    }

    /// Fetch a single post with its counts
    pub async fn get_post(&self, post_id: Uuid) -> Result<Option<PostResponse>> {
        let post = match post_repo::find_post_by_id(&self.pool, post_id).await? {
            Some(post) => post,
            None => return Ok(None),
        };

        let likes_count = like_repo::count_likes_by_post(&self.pool, post_id).await?;
        let comments_count = comment_repo::count_comments_by_post(&self.pool, post_id).await?;

        Ok(Some(PostResponse::from_post(
            post,
            likes_count,
            comments_count,
        )))
    }

    /// Overwrite username and content and refresh updated_at.
    /// Both fields are replaced; there is no partial merge.
    pub async fn update_post(
        &self,
        post_id: Uuid,
        username: &str,
        content: &str,
    ) -> Result<Option<PostResponse>> {
        let mut tx = self.pool.begin().await?;

        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, username, content, created_at, updated_at
            FROM posts
            WHERE id = ?
            "#,
        )
        .bind(post_id)
        .fetch_optional(&mut *tx)
        .await?;

        let mut post = match post {
            Some(post) => post,
            None => return Ok(None),
        };

        post.username = username.to_string();
        post.content = content.to_string();
        post.updated_at = Utc::now();

        sqlx::query(
            r#"
            UPDATE posts
            SET username = ?, content = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&post.username)
        .bind(&post.content)
        .bind(post.updated_at)
        .bind(post.id)
        .execute(&mut *tx)
        .await?;

        let likes_count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM likes WHERE post_id = ?"#)
            .bind(post_id)
            .fetch_one(&mut *tx)
            .await?;
        let comments_count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM comments WHERE post_id = ?"#)
                .bind(post_id)
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;

        Ok(Some(PostResponse::from_post(
            post,
            likes_count,
            comments_count,
        )))
    }

    /// Delete a post together with its comments and likes in one transaction.
    /// Returns whether a post row was actually removed.
    pub async fn delete_post(&self, post_id: Uuid) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(r#"DELETE FROM comments WHERE post_id = ?"#)
            .bind(post_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query(r#"DELETE FROM likes WHERE post_id = ?"#)
            .bind(post_id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query(r#"DELETE FROM posts WHERE id = ?"#)
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(post_id = %post_id, "post deleted");
        }

        Ok(deleted)
    }

    /// Existence gate used by the comment and like handlers
    pub async fn post_exists(&self, post_id: Uuid) -> Result<bool> {
        let exists = post_repo::post_exists(&self.pool, post_id).await?;
        Ok(exists)
    }
}
