//! In-memory test doubles for the store gateway and generation provider
//!
//! Used to exercise feed assembly and the summarization pipeline in
//! isolation, without Postgres or a network.

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;
use timeline_service::db::{ContentStore, StoreError, StoreResult};
use timeline_service::models::{Like, Post, Reply, User};
use timeline_service::services::gemini::{
    ProviderError, ProviderOutput, ProviderResult, SummaryProvider,
};
use uuid::Uuid;

/// In-memory content store with injectable per-operation failures.
#[derive(Default)]
pub struct MockContentStore {
    users: Mutex<Vec<User>>,
    posts: Mutex<Vec<Post>>,
    replies: Mutex<Vec<Reply>>,
    likes: Mutex<Vec<Like>>,
    /// Monotonic tick so seeded rows get strictly increasing timestamps.
    seq: AtomicI64,
    pub fail_list_posts: Mutex<bool>,
    pub fail_likes_for: Mutex<HashSet<Uuid>>,
    pub fail_replies_for: Mutex<HashSet<Uuid>>,
}

impl MockContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_timestamp(&self) -> chrono::DateTime<Utc> {
        let tick = self.seq.fetch_add(1, Ordering::SeqCst);
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::milliseconds(tick)
    }

    /// Seed a post directly, bypassing the trait surface.
    pub fn seed_post(&self, content: &str) -> Post {
        let now = self.next_timestamp();
        let post = Post {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.posts.lock().unwrap().push(post.clone());
        post
    }

    pub fn seed_reply(&self, post_id: Uuid, content: &str) -> Reply {
        let now = self.next_timestamp();
        let reply = Reply {
            id: Uuid::new_v4(),
            post_id,
            user_id: Uuid::new_v4(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.replies.lock().unwrap().push(reply.clone());
        reply
    }

    pub fn seed_like(&self, post_id: Uuid) {
        let like = Like {
            id: Uuid::new_v4(),
            post_id,
            user_id: Uuid::new_v4(),
            created_at: self.next_timestamp(),
        };
        self.likes.lock().unwrap().push(like);
    }
}

#[async_trait]
impl ContentStore for MockContentStore {
    async fn find_or_create_user(
        &self,
        uid: &str,
        email: &str,
        username: &str,
    ) -> StoreResult<User> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter().find(|u| u.uid == uid) {
            return Ok(user.clone());
        }
        let user = User {
            id: Uuid::new_v4(),
            uid: uid.to_string(),
            email: email.to_string(),
            username: username.to_string(),
            created_at: self.next_timestamp(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn insert_post(&self, user_id: Uuid, content: &str) -> StoreResult<Post> {
        let now = self.next_timestamp();
        let post = Post {
            id: Uuid::new_v4(),
            user_id,
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn insert_reply(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        content: &str,
    ) -> StoreResult<Reply> {
        let now = self.next_timestamp();
        let reply = Reply {
            id: Uuid::new_v4(),
            post_id,
            user_id,
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.replies.lock().unwrap().push(reply.clone());
        Ok(reply)
    }

    async fn insert_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<Like> {
        let like = Like {
            id: Uuid::new_v4(),
            post_id,
            user_id,
            created_at: self.next_timestamp(),
        };
        self.likes.lock().unwrap().push(like.clone());
        Ok(like)
    }

    async fn list_posts(&self) -> StoreResult<Vec<Post>> {
        if *self.fail_list_posts.lock().unwrap() {
            return Err(StoreError("simulated post listing failure".into()));
        }
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn count_likes(&self, post_id: Uuid) -> StoreResult<i64> {
        if self.fail_likes_for.lock().unwrap().contains(&post_id) {
            return Err(StoreError("simulated like count failure".into()));
        }
        let count = self
            .likes
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.post_id == post_id)
            .count();
        Ok(count as i64)
    }

    async fn list_replies(&self, post_id: Uuid) -> StoreResult<Vec<Reply>> {
        if self.fail_replies_for.lock().unwrap().contains(&post_id) {
            return Err(StoreError("simulated reply listing failure".into()));
        }
        let mut replies: Vec<Reply> = self
            .replies
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.post_id == post_id)
            .cloned()
            .collect();
        replies.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(replies)
    }
}

/// What the mock provider should do on each call.
#[derive(Debug, Clone)]
pub enum ProviderBehavior {
    Text(String),
    Empty,
    Fail,
}

/// Mock generation provider that records every prompt it receives.
pub struct MockProvider {
    behavior: ProviderBehavior,
    pub prompts: Mutex<Vec<String>>,
    pub calls: AtomicUsize,
}

impl MockProvider {
    pub fn new(behavior: ProviderBehavior) -> Self {
        Self {
            behavior,
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SummaryProvider for MockProvider {
    async fn generate(&self, prompt: &str) -> ProviderResult<ProviderOutput> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.behavior {
            ProviderBehavior::Text(text) => Ok(ProviderOutput::Text(text.clone())),
            ProviderBehavior::Empty => Ok(ProviderOutput::Empty),
            ProviderBehavior::Fail => Err(ProviderError("simulated provider outage".into())),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
