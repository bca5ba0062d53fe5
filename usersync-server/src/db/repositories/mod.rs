mod comment_repository;
mod post_repository;
mod user_repository;

pub use comment_repository::CommentRepository;
pub use post_repository::PostRepository;
pub use user_repository::UserRepository;
