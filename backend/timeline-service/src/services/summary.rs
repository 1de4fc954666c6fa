/// Summarization gateway - turns the replies of one post into a single
/// generated summary string, degrading to fixed sentinels on failure.
use crate::db::ContentStore;
use crate::services::gemini::{ProviderOutput, SummaryProvider};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

/// Fixed instruction prepended to the concatenated replies.
const SUMMARY_INSTRUCTION: &str = "Summarize the following replies:";

/// Sentinel returned when the provider call itself failed.
pub const SUMMARY_UNAVAILABLE: &str = "summary unavailable";

/// Sentinel returned when the call succeeded but produced no text.
/// Deliberately distinct from `SUMMARY_UNAVAILABLE` so the two degradation
/// modes stay diagnosable.
pub const SUMMARY_EMPTY: &str = "no summary produced";

/// Result of a summarization request. Always a usable value; provider and
/// store failures degrade to the sentinel variants instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// Text extracted from the provider response.
    Generated(String),
    /// Provider responded but yielded no candidates/parts/text.
    Empty,
    /// Provider call failed (network, timeout, non-2xx, unparsable body).
    Unavailable,
}

impl Summary {
    /// The string emitted to the caller.
    pub fn text(&self) -> &str {
        match self {
            Summary::Generated(text) => text,
            Summary::Empty => SUMMARY_EMPTY,
            Summary::Unavailable => SUMMARY_UNAVAILABLE,
        }
    }

    /// Machine-readable discriminator for the external interface.
    pub fn status(&self) -> &'static str {
        match self {
            Summary::Generated(_) => "generated",
            Summary::Empty => "empty",
            Summary::Unavailable => "unavailable",
        }
    }
}

/// Summarization service over a content store and a generation provider.
pub struct SummaryService {
    store: Arc<dyn ContentStore>,
    provider: Arc<dyn SummaryProvider>,
}

impl SummaryService {
    pub fn new(store: Arc<dyn ContentStore>, provider: Arc<dyn SummaryProvider>) -> Self {
        Self { store, provider }
    }

    /// Summarize all replies to a post.
    ///
    /// A post with no replies (including an unknown post id - the reply
    /// fetch returns an empty set, not an error) is summarized from the
    /// empty concatenation. The provider is invoked exactly once; any
    /// provider failure is absorbed into `Summary::Unavailable`.
    pub async fn summarize(&self, post_id: Uuid) -> Summary {
        let replies = match self.store.list_replies(post_id).await {
            Ok(replies) => replies,
            Err(e) => {
                // Degraded-but-successful: treat an unreadable reply set as
                // no data rather than failing the request.
                warn!(%post_id, "reply fetch for summarization failed: {}", e);
                Vec::new()
            }
        };

        let prompt = build_prompt(replies.iter().map(|r| r.content.as_str()));

        match self.provider.generate(&prompt).await {
            Ok(ProviderOutput::Text(text)) => Summary::Generated(text),
            Ok(ProviderOutput::Empty) => {
                warn!(%post_id, provider = self.provider.name(), "provider returned no candidates");
                Summary::Empty
            }
            Err(e) => {
                warn!(%post_id, provider = self.provider.name(), "provider call failed: {}", e);
                Summary::Unavailable
            }
        }
    }
}

/// Build the provider prompt: each reply's content terminated by a line
/// break, chronological order, wrapped in the fixed instruction template.
pub fn build_prompt<'a>(replies: impl Iterator<Item = &'a str>) -> String {
    let mut joined = String::new();
    for content in replies {
        joined.push_str(content);
        joined.push('\n');
    }
    format!("{}\n{}", SUMMARY_INSTRUCTION, joined)
}
