/// Summary handler - generated summary of all replies to a post
use crate::db::ContentStore;
use crate::error::Result;
use crate::services::{SummaryProvider, SummaryService};
use actix_web::{web, HttpResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
    /// "generated", "empty" or "unavailable" - lets callers distinguish the
    /// fallback sentinels without comparing prose strings.
    pub status: &'static str,
}

/// Summarize the replies of one post.
///
/// Provider failures are not request failures: the response is always 200
/// with either the generated text or a fallback sentinel.
pub async fn get_summary(
    store: web::Data<dyn ContentStore>,
    provider: web::Data<dyn SummaryProvider>,
    post_id: web::Path<uuid::Uuid>,
) -> Result<HttpResponse> {
    let service = SummaryService::new(store.clone().into_inner(), provider.clone().into_inner());
    let summary = service.summarize(*post_id).await;

    Ok(HttpResponse::Ok().json(SummaryResponse {
        summary: summary.text().to_string(),
        status: summary.status(),
    }))
}
