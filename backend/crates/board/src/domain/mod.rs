//! Domain Layer

pub mod entities;
pub mod repository;

pub use entities::Comment;
pub use repository::CommentRepository;
