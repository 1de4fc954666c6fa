/// Like handlers - append a like event to a post
use crate::db::ContentStore;
use crate::error::{AppError, Result};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateLikeRequest {
    pub post_id: Uuid,
    pub user_id: Uuid,
}

/// Record a like for a post. The feed recomputes counts from like rows on
/// every read, so there is nothing to update here beyond the insert.
pub async fn create_like(
    store: web::Data<dyn ContentStore>,
    req: web::Json<CreateLikeRequest>,
) -> Result<HttpResponse> {
    let like = store
        .insert_like(req.post_id, req.user_id)
        .await
        .map_err(|e| AppError::StoreError(e.to_string()))?;

    Ok(HttpResponse::Created().json(like))
}
