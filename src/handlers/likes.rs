use crate::error::{ErrorResponse, Result};
use crate::services::{LikeOutcome, LikeService, PostService};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct LikeRequest {
    pub username: String,
}

/// Like a post on behalf of a username
pub async fn like_post(
    pool: web::Data<SqlitePool>,
    post_id: web::Path<Uuid>,
    req: web::Json<LikeRequest>,
) -> Result<HttpResponse> {
    let post_id = post_id.into_inner();

    // Check if the post exists
    let posts = PostService::new(pool.get_ref().clone());
    if !posts.post_exists(post_id).await? {
        return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Post not found", 404)));
    }

    let service = LikeService::new(pool.get_ref().clone());
    match service.like_post(post_id, &req.username).await? {
        LikeOutcome::Liked(like) => Ok(HttpResponse::Created().json(like)),
        LikeOutcome::AlreadyLiked => Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
            "User already liked this post",
            400,
        ))),
    }
}

/// Remove every like from a post
pub async fn unlike_post(
    pool: web::Data<SqlitePool>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let post_id = post_id.into_inner();

    // Check if the post exists
    let posts = PostService::new(pool.get_ref().clone());
    if !posts.post_exists(post_id).await? {
        return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Post not found", 404)));
    }

    let service = LikeService::new(pool.get_ref().clone());
    service.unlike_post(post_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
