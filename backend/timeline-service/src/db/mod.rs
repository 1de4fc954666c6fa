/// Database access layer
///
/// `ContentStore` is the gateway every service receives at construction
/// time. Each operation is independently failable; callers decide whether a
/// failure is fatal to the request or absorbed into a degraded result.
pub mod postgres;

use crate::models::{Like, Post, Reply, User};
use async_trait::async_trait;
use uuid::Uuid;

pub use postgres::PgContentStore;

/// Store errors carry only the underlying message; mapping to HTTP status
/// happens at the handler boundary.
pub type StoreResult<T> = Result<T, StoreError>;

/// A read/write against the relational store failed.
#[derive(Debug, thiserror::Error)]
#[error("store error: {0}")]
pub struct StoreError(pub String);

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError(err.to_string())
    }
}

/// Row-level CRUD surface for posts, replies, likes and users.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Lookup-or-create a user keyed by its external identifier.
    async fn find_or_create_user(
        &self,
        uid: &str,
        email: &str,
        username: &str,
    ) -> StoreResult<User>;

    /// Insert a post; the store assigns identifier and timestamps.
    async fn insert_post(&self, user_id: Uuid, content: &str) -> StoreResult<Post>;

    /// Insert a reply to an existing post.
    async fn insert_reply(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        content: &str,
    ) -> StoreResult<Reply>;

    /// Record a like event for a post. Append-only; uniqueness per user is
    /// not enforced here.
    async fn insert_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<Like>;

    /// List post header rows, newest-first. No replies or likes attached.
    async fn list_posts(&self) -> StoreResult<Vec<Post>>;

    /// Count like rows for a post at read time.
    async fn count_likes(&self, post_id: Uuid) -> StoreResult<i64>;

    /// List replies for a post, oldest-first.
    async fn list_replies(&self, post_id: Uuid) -> StoreResult<Vec<Reply>>;
}
