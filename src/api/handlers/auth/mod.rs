//! Sign-in and sign-up submission endpoints.
//!
//! Both modes invoke the same account workflow; sign-in submits an empty
//! full name. Any workflow failure is collapsed into one fixed user-facing
//! message, with the failing step left to the logs.

pub mod sign_in;
pub mod sign_up;

use crate::account::AccountService;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

/// Fixed user-facing message for any workflow failure.
pub(crate) const CREATE_ACCOUNT_FAILED: &str = "Failed to create an account. Please, try again";

#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AccountCreated {
    pub account_id: String,
}

/// Run the account workflow for validated input and shape the response.
pub(crate) async fn submit(service: &AccountService, full_name: &str, email: &str) -> Response {
    match service.create_account(full_name, email).await {
        Ok(account_id) => (StatusCode::OK, Json(AccountCreated { account_id })).into_response(),
        Err(err) => {
            error!("Account workflow failed: {err:?}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                CREATE_ACCOUNT_FAILED.to_string(),
            )
                .into_response()
        }
    }
}
