/// Post handlers - feed listing and post creation
use crate::db::ContentStore;
use crate::error::{AppError, Result};
use crate::services::FeedService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub user_id: Uuid,
    pub content: String,
}

/// Get the assembled feed: all posts newest-first, each with its derived
/// like count and oldest-first replies.
pub async fn get_feed(store: web::Data<dyn ContentStore>) -> Result<HttpResponse> {
    let service = FeedService::new(store.clone().into_inner());
    let feed = service.assemble_feed().await?;

    Ok(HttpResponse::Ok().json(feed))
}

/// Create a new post
pub async fn create_post(
    store: web::Data<dyn ContentStore>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    if req.content.trim().is_empty() {
        return Err(AppError::ValidationError(
            "post content must not be empty".into(),
        ));
    }

    let post = store
        .insert_post(req.user_id, req.content.trim())
        .await
        .map_err(|e| AppError::StoreError(e.to_string()))?;

    Ok(HttpResponse::Created().json(post))
}
