//! HTTP handlers for `/api/contact`.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::backend::contact::service::{self, CONTACT_THANKS};
use crate::backend::error::ApiError;
use crate::backend::extract::ApiJson;
use crate::backend::store::Store;
use crate::shared::models::{ContactMessage, ContactRequest};
use crate::shared::ApiResponse;

/// `POST /api/contact`
pub async fn submit_message(
    State(store): State<Arc<dyn Store>>,
    ApiJson(request): ApiJson<ContactRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ContactMessage>>), ApiError> {
    let message = service::submit(store.as_ref(), request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(message).with_message(CONTACT_THANKS)),
    ))
}

/// `GET /api/contact` (any authenticated caller)
pub async fn list_messages(
    State(store): State<Arc<dyn Store>>,
) -> Result<Json<ApiResponse<Vec<ContactMessage>>>, ApiError> {
    let messages = service::list_messages(store.as_ref()).await?;
    Ok(Json(ApiResponse::list(messages)))
}
