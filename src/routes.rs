use crate::handlers;
use actix_web::web;

/// Register every route under the /api scope.
/// Shared by the server startup and the integration tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/welcome", web::get().to(handlers::welcome))
            .route("/posts", web::get().to(handlers::list_posts))
            .route("/posts", web::post().to(handlers::create_post))
            .route("/posts/{post_id}", web::get().to(handlers::get_post))
            .route("/posts/{post_id}", web::patch().to(handlers::update_post))
            .route("/posts/{post_id}", web::delete().to(handlers::delete_post))
            .route(
                "/posts/{post_id}/comments",
                web::get().to(handlers::list_comments),
            )
            .route(
                "/posts/{post_id}/comments",
                web::post().to(handlers::create_comment),
            )
            .route(
                "/posts/{post_id}/comments/{comment_id}",
                web::get().to(handlers::get_comment),
            )
            .route(
                "/posts/{post_id}/comments/{comment_id}",
                web::patch().to(handlers::update_comment),
            )
            .route(
                "/posts/{post_id}/comments/{comment_id}",
                web::delete().to(handlers::delete_comment),
            )
            .route("/posts/{post_id}/likes", web::post().to(handlers::like_post))
            .route(
                "/posts/{post_id}/likes",
                web::delete().to(handlers::unlike_post),
            ),
    );
}
