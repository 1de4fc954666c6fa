/// Data models for timeline-service
///
/// Row types map 1:1 onto the Postgres schema; `PostAggregate` is the
/// caller-facing record that merges a post with its derived like count and
/// nested replies.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - resolved (or created) from an external identity provider uid
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub uid: String,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Post entity - a short message on the feed
///
/// The like count is never stored on this row; it is recomputed from the
/// likes relation on every read.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reply entity - a comment attached to a post, immutable after creation
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reply {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Like entity - append-only; only its count per post matters to the feed
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Like {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A post enriched with its derived like count and ordered reply sequence
///
/// Replies are chronological oldest-first; the feed itself is emitted
/// newest-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostAggregate {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub likes: i64,
    pub replies: Vec<Reply>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostAggregate {
    /// Build an aggregate from a post header row plus its enrichment facets.
    pub fn new(post: Post, likes: i64, replies: Vec<Reply>) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            content: post.content,
            likes,
            replies,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
