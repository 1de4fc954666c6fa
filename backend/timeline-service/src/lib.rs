/// Timeline Service Library
///
/// Backend for a lightweight social feed: users post short messages, reply
/// to posts, like posts, and can request a generated summary of all replies
/// to a post.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Data structures for users, posts, replies, likes
/// - `services`: Feed assembly and reply summarization
/// - `db`: Store gateway trait and Postgres implementation
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
