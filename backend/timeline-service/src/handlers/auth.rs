/// Login handler - resolves (or creates) a user from its external identity
use crate::db::ContentStore;
use crate::error::{AppError, Result};
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub uid: String,
    pub email: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user_id: Uuid,
}

/// Lookup-or-create a user keyed by the external identifier.
pub async fn login(
    store: web::Data<dyn ContentStore>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    if req.uid.trim().is_empty() {
        return Err(AppError::ValidationError("uid must not be empty".into()));
    }

    let user = store
        .find_or_create_user(&req.uid, &req.email, &req.username)
        .await
        .map_err(|e| AppError::StoreError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(LoginResponse { user_id: user.id }))
}
