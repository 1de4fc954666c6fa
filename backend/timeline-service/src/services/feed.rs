/// Feed assembler - merges posts, derived like counts and ordered replies
/// into one aggregate record per post.
use crate::db::ContentStore;
use crate::error::{AppError, Result};
use crate::models::PostAggregate;
use std::sync::Arc;
use tracing::warn;

/// Assembles the full feed from the content store.
pub struct FeedService {
    store: Arc<dyn ContentStore>,
}

impl FeedService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Assemble the feed: every post newest-first, each enriched with its
    /// like count and oldest-first reply sequence.
    ///
    /// Only a failure of the top-level post listing is fatal. Per-post
    /// enrichment failures are absorbed: a failed like count defaults to 0
    /// and a failed reply fetch to an empty sequence, so one broken facet
    /// never blanks the rest of the feed.
    pub async fn assemble_feed(&self) -> Result<Vec<PostAggregate>> {
        let posts = self
            .store
            .list_posts()
            .await
            .map_err(|e| AppError::StoreError(e.to_string()))?;

        let mut feed = Vec::with_capacity(posts.len());
        for post in posts {
            let likes = match self.store.count_likes(post.id).await {
                Ok(count) => count,
                Err(e) => {
                    warn!(post_id = %post.id, "like count fetch failed: {}", e);
                    0
                }
            };

            let replies = match self.store.list_replies(post.id).await {
                Ok(replies) => replies,
                Err(e) => {
                    warn!(post_id = %post.id, "reply fetch failed: {}", e);
                    Vec::new()
                }
            };

            feed.push(PostAggregate::new(post, likes, replies));
        }

        Ok(feed)
    }
}
