/// Reply handlers - reply creation
use crate::db::ContentStore;
use crate::error::{AppError, Result};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateReplyRequest {
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
}

/// Create a new reply to an existing post
pub async fn create_reply(
    store: web::Data<dyn ContentStore>,
    req: web::Json<CreateReplyRequest>,
) -> Result<HttpResponse> {
    if req.content.trim().is_empty() {
        return Err(AppError::ValidationError(
            "reply content must not be empty".into(),
        ));
    }

    let reply = store
        .insert_reply(req.post_id, req.user_id, req.content.trim())
        .await
        .map_err(|e| AppError::StoreError(e.to_string()))?;

    Ok(HttpResponse::Created().json(reply))
}
