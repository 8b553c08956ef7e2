use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::auth::flows;
use crate::auth::store::UserStore;

#[derive(ToSchema, Serialize, Deserialize)]
pub struct RegisterRequest {
    email: String,
    password: String,
}

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User was created"),
        (status = 400, description = "Validation failed or the user already exists"),
        (status = 500, description = "Unexpected failure"),
    ),
    tag = "auth"
)]
// axum handler for registration; the payload is skipped from the span so
// credentials never reach the logs
#[instrument(skip_all)]
pub async fn register(
    Extension(store): Extension<Arc<dyn UserStore>>,
    payload: Option<Json<RegisterRequest>>,
) -> impl IntoResponse {
    let Some(Json(request)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Missing payload" })),
        );
    };

    match flows::register(store.as_ref(), &request.email, &request.password).await {
        Ok(registered) => {
            debug!("created user {}", registered.user_id);

            (
                StatusCode::CREATED,
                Json(json!({ "message": "User was created" })),
            )
        }
        Err(err) => err.response_parts("Incorrect registration data"),
    }
}
