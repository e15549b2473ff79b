/// HTTP request handlers
///
/// Thin request/response mapping over the services. Every comment and like
/// endpoint checks that the parent post exists before doing anything else.
pub mod comments;
pub mod health;
pub mod likes;
pub mod posts;

// Re-export handler functions at module level
pub use comments::{create_comment, delete_comment, get_comment, list_comments, update_comment};
pub use health::{health, welcome};
pub use likes::{like_post, unlike_post};
pub use posts::{create_post, delete_post, get_post, list_posts, update_post};
