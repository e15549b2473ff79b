/// Data models: table rows and the response projections handlers serialize.
///
/// `Comment` and `Like` double as their own response shapes; posts are
/// returned as `PostResponse`, which carries the derived counts.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row of the posts table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post shape returned by the API: the row plus likesCount/commentsCount,
/// which are computed per request and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub likes_count: i64,
    pub comments_count: i64,
}

impl PostResponse {
    /// Annotate a post row with its current counts
    pub fn from_post(post: Post, likes_count: i64, comments_count: i64) -> Self {
        Self {
            id: post.id,
            username: post.username,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
            likes_count,
            comments_count,
        }
    }
}

/// A row of the comments table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A row of the likes table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: Uuid,
    pub post_id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
