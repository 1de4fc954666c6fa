/// Postgres implementation of the content store
use crate::db::{ContentStore, StoreResult};
use crate::models::{Like, Post, Reply, User};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Content store backed by a shared `PgPool`.
#[derive(Clone)]
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for PgContentStore {
    async fn find_or_create_user(
        &self,
        uid: &str,
        email: &str,
        username: &str,
    ) -> StoreResult<User> {
        // Upsert keyed on the external uid; the no-op update lets RETURNING
        // yield the existing row instead of a racy select-then-insert.
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (uid, email, username)
            VALUES ($1, $2, $3)
            ON CONFLICT (uid) DO UPDATE
            SET uid = EXCLUDED.uid
            RETURNING id, uid, email, username, created_at
            "#,
        )
        .bind(uid)
        .bind(email)
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert_post(&self, user_id: Uuid, content: &str) -> StoreResult<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (user_id, content)
            VALUES ($1, $2)
            RETURNING id, user_id, content, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn insert_reply(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        content: &str,
    ) -> StoreResult<Reply> {
        let reply = sqlx::query_as::<_, Reply>(
            r#"
            INSERT INTO replies (post_id, user_id, content)
            VALUES ($1, $2, $3)
            RETURNING id, post_id, user_id, content, created_at, updated_at
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(reply)
    }

    async fn insert_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<Like> {
        let like = sqlx::query_as::<_, Like>(
            r#"
            INSERT INTO likes (post_id, user_id)
            VALUES ($1, $2)
            RETURNING id, post_id, user_id, created_at
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(like)
    }

    async fn list_posts(&self) -> StoreResult<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, content, created_at, updated_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn count_likes(&self, post_id: Uuid) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM likes
            WHERE post_id = $1
            "#,
        )
        .bind(post_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn list_replies(&self, post_id: Uuid) -> StoreResult<Vec<Reply>> {
        let replies = sqlx::query_as::<_, Reply>(
            r#"
            SELECT id, post_id, user_id, content, created_at, updated_at
            FROM replies
            WHERE post_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(replies)
    }
}
