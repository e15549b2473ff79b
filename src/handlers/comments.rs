use crate::error::{ErrorResponse, Result};
use crate::services::{CommentService, PostService};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub username: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
    pub username: String,
    pub content: String,
}

/// List all comments on a post, oldest first
pub async fn list_comments(
    pool: web::Data<SqlitePool>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let post_id = post_id.into_inner();

    // Check if the post exists
    let posts = PostService::new(pool.get_ref().clone());
    if !posts.post_exists(post_id).await? {
        return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Post not found", 404)));
    }

    let service = CommentService::new(pool.get_ref().clone());
    let comments = service.list_comments(post_id).await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// Create a new comment on a post
pub async fn create_comment(
    pool: web::Data<SqlitePool>,
    post_id: web::Path<Uuid>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let post_id = post_id.into_inner();

    // Check if the post exists
    let posts = PostService::new(pool.get_ref().clone());
    if !posts.post_exists(post_id).await? {
        return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Post not found", 404)));
    }

    let service = CommentService::new(pool.get_ref().clone());
    let comment = service
        .create_comment(post_id, &req.username, &req.content)
        .await?;
    Ok(HttpResponse::Created().json(comment))
}

/// Fetch a single comment, scoped to its post
pub async fn get_comment(
    pool: web::Data<SqlitePool>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();

    // Check if the post exists
    let posts = PostService::new(pool.get_ref().clone());
    if !posts.post_exists(post_id).await? {
        return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Post not found", 404)));
    }

    let service = CommentService::new(pool.get_ref().clone());
    match service.get_comment(post_id, comment_id).await? {
        Some(comment) => Ok(HttpResponse::Ok().json(comment)),
        None => Ok(HttpResponse::NotFound().json(ErrorResponse::new(
            "Post or comment not found",
            404,
        ))),
    }
}

/// Update a comment's username and content, scoped to its post
pub async fn update_comment(
    pool: web::Data<SqlitePool>,
    path: web::Path<(Uuid, Uuid)>,
    req: web::Json<UpdateCommentRequest>,
) -> Result<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();

    // Check if the post exists
    let posts = PostService::new(pool.get_ref().clone());
    if !posts.post_exists(post_id).await? {
        return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Post not found", 404)));
    }

    let service = CommentService::new(pool.get_ref().clone());
    match service
        .update_comment(post_id, comment_id, &req.username, &req.content)
        .await?
    {
        Some(comment) => Ok(HttpResponse::Ok().json(comment)),
        None => Ok(HttpResponse::NotFound().json(ErrorResponse::new(
            "Post or comment not found",
            404,
        ))),
    }
}

/// Delete a comment, scoped to its post
pub async fn delete_comment(
    pool: web::Data<SqlitePool>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();

    // Check if the post exists
    let posts = PostService::new(pool.get_ref().clone());
    if !posts.post_exists(post_id).await? {
        return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Post not found", 404)));
    }

    let service = CommentService::new(pool.get_ref().clone());
    if service.delete_comment(post_id, comment_id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(HttpResponse::NotFound().json(ErrorResponse::new(
            "Post or comment not found",
            404,
        )))
    }
}
