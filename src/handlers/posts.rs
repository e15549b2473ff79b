use crate::error::{ErrorResponse, Result};
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub username: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub username: String,
    pub content: String,
}

/// List all posts, newest first
pub async fn list_posts(pool: web::Data<SqlitePool>) -> Result<HttpResponse> {
    let service = PostService::new(pool.get_ref().clone());
    let posts = service.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// Create a new post
pub async fn create_post(
    pool: web::Data<SqlitePool>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new(pool.get_ref().clone());
    let post = service.create_post(&req.username, &req.content).await?;
    Ok(HttpResponse::Created().json(post))
}

/// Fetch a single post by id
pub async fn get_post(
    pool: web::Data<SqlitePool>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new(pool.get_ref().clone());
    match service.get_post(*post_id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Ok(HttpResponse::NotFound().json(ErrorResponse::new("Post not found", 404))),
    }
}

/// Update a post's username and content
pub async fn update_post(
    pool: web::Data<SqlitePool>,
    post_id: web::Path<Uuid>,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new(pool.get_ref().clone());
    match service
        .update_post(*post_id, &req.username, &req.content)
        .await?
    {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Ok(HttpResponse::NotFound().json(ErrorResponse::new("Post not found", 404))),
    }
}

/// Delete a post and everything attached to it
pub async fn delete_post(
    pool: web::Data<SqlitePool>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new(pool.get_ref().clone());
    if service.delete_post(*post_id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(HttpResponse::NotFound().json(ErrorResponse::new("Post not found", 404)))
    }
}
