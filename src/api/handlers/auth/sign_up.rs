use super::{submit, AccountCreated};
use crate::{
    account::AccountService,
    api::handlers::{normalize_email, valid_email, valid_full_name},
};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub full_name: String,
    pub email: String,
}

#[utoipa::path(
    post,
    path= "/v1/auth/sign-up",
    request_body = SignUpRequest,
    responses (
        (status = 200, description = "OTP sent, account created when the email was unknown", body = [AccountCreated], content_type = "application/json"),
        (status = 400, description = "Payload failed validation", body = String),
        (status = 500, description = "Account workflow failed", body = String),
    ),
    tag= "auth"
)]
#[instrument(skip(service, payload))]
pub async fn sign_up(
    service: Extension<Arc<AccountService>>,
    payload: Option<Json<SignUpRequest>>,
) -> impl IntoResponse {
    let request: SignUpRequest = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response(),
    };

    debug!("sign-up: {:?}", request);
    let email = normalize_email(&request.email);

    // reject before any remote call
    if !valid_full_name(&request.full_name) {
        return (StatusCode::BAD_REQUEST, "Invalid full name".to_string()).into_response();
    }

    if !valid_email(&email) {
        return (StatusCode::BAD_REQUEST, "Invalid email".to_string()).into_response();
    }

    submit(&service, &request.full_name, &email).await
}
