use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::auth::flows;
use crate::auth::store::UserStore;
use crate::auth::token::TokenIssuer;

#[derive(ToSchema, Serialize, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    token: String,
    user_id: String,
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session token and user id", body = LoginResponse),
        (status = 400, description = "Validation failed, unknown user or wrong password"),
        (status = 500, description = "Unexpected failure"),
    ),
    tag = "auth"
)]
// axum handler for login; the payload is skipped from the span so
// credentials never reach the logs
#[instrument(skip_all)]
pub async fn login(
    Extension(store): Extension<Arc<dyn UserStore>>,
    Extension(issuer): Extension<Arc<TokenIssuer>>,
    payload: Option<Json<LoginRequest>>,
) -> impl IntoResponse {
    let Some(Json(request)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Missing payload" })),
        );
    };

    match flows::authenticate(store.as_ref(), &issuer, &request.email, &request.password).await {
        Ok(session) => {
            debug!("authenticated user {}", session.user_id);

            (
                StatusCode::OK,
                Json(json!(LoginResponse {
                    token: session.token,
                    user_id: session.user_id.to_string(),
                })),
            )
        }
        Err(err) => err.response_parts("Incorrect login data"),
    }
}
