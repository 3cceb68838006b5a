use super::{submit, AccountCreated};
use crate::{
    account::AccountService,
    api::handlers::{normalize_email, valid_email},
};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
}

#[utoipa::path(
    post,
    path= "/v1/auth/sign-in",
    request_body = SignInRequest,
    responses (
        (status = 200, description = "OTP sent for the submitted email", body = [AccountCreated], content_type = "application/json"),
        (status = 400, description = "Payload failed validation", body = String),
        (status = 500, description = "Account workflow failed", body = String),
    ),
    tag= "auth"
)]
#[instrument(skip(service, payload))]
pub async fn sign_in(
    service: Extension<Arc<AccountService>>,
    payload: Option<Json<SignInRequest>>,
) -> impl IntoResponse {
    let request: SignInRequest = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response(),
    };

    debug!("sign-in: {:?}", request);
    let email = normalize_email(&request.email);

    // reject before any remote call
    if !valid_email(&email) {
        return (StatusCode::BAD_REQUEST, "Invalid email".to_string()).into_response();
    }

    // sign-in submits an empty full name
    submit(&service, "", &email).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{appwrite, cli::globals::GlobalArgs};
    use anyhow::Result;
    use axum::body::to_bytes;
    use secrecy::SecretString;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn service(uri: &str) -> Extension<Arc<AccountService>> {
        let mut globals = GlobalArgs::new(uri.to_string());
        globals.database_id = "main".to_string();
        globals.users_collection_id = "users".to_string();

        let client = appwrite::Client::new(
            uri,
            "armadio",
            SecretString::from("secret-key".to_string()),
        )
        .expect("client should build");

        Extension(Arc::new(AccountService::new(Arc::new(client), &globals)))
    }

    // Nothing listens on this endpoint; validation must reject first.
    const UNREACHABLE: &str = "http://127.0.0.1:9";

    #[tokio::test]
    async fn sign_in_missing_payload() {
        let response = sign_in(service(UNREACHABLE), None).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn sign_in_rejects_malformed_email_before_any_remote_call() {
        let response = sign_in(
            service(UNREACHABLE),
            Some(Json(SignInRequest {
                email: "not-an-email".to_string(),
            })),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn sign_in_returns_fresh_otp_for_existing_user() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/databases/main/collections/users/documents"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total": 1,
                "documents": [{
                    "$id": "doc-1",
                    "fullName": "Jane Doe",
                    "email": "jane@example.com",
                    "avatar": "https://img.test/a.png",
                    "accountId": "otp-old"
                }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/account/tokens/email"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "userId": "otp-456"
            })))
            .mount(&server)
            .await;
        // Existing user: no document may be written.
        Mock::given(method("POST"))
            .and(path("/v1/databases/main/collections/users/documents"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let response = sign_in(
            service(&server.uri()),
            Some(Json(SignInRequest {
                email: "jane@example.com".to_string(),
            })),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await?;
        let created: AccountCreated = serde_json::from_slice(&body)?;
        assert_eq!(created.account_id, "otp-456");
        Ok(())
    }
}
