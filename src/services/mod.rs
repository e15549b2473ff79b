/// Business logic layer
///
/// Services own the transaction boundaries and translate rows into the
/// shapes the handlers serialize. Absence is signaled with `Option`, never
/// by raising; the duplicate-like outcome has its own type.
pub mod comments;
pub mod likes;
pub mod posts;

pub use comments::CommentService;
pub use likes::{LikeOutcome, LikeService};
pub use posts::PostService;
