/// Business logic layer
pub mod feed;
pub mod gemini;
pub mod summary;

pub use feed::FeedService;
pub use gemini::{GeminiClient, ProviderError, ProviderOutput, ProviderResult, SummaryProvider};
pub use summary::{Summary, SummaryService, SUMMARY_EMPTY, SUMMARY_UNAVAILABLE};
