//! Account-creation workflow.
//!
//! An account is "created" on every successful submission: look the user up
//! by email, always issue a fresh email OTP, and only persist a new user
//! document when the email is unknown. The identifier returned by the OTP
//! issuance is the account identifier handed back to the caller; for
//! existing users it is NOT written back to the stored document.
//!
//! The lookup/create sequence is serialized per email within the process;
//! the store enforces no uniqueness of its own.

use crate::{
    appwrite,
    appwrite::types::{NewUser, Query, UserDocument},
    cli::globals::GlobalArgs,
};
use std::{collections::HashMap, sync::Arc};
use thiserror::Error;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, error, instrument};

/// Avatar assigned to users created without a picture of their own.
pub const DEFAULT_AVATAR_URL: &str = "https://assets.armadio.dev/avatars/placeholder.png";

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Failed to look up user by email")]
    Lookup(#[source] appwrite::Error),
    #[error("Failed to send an OTP")]
    OtpIssuance(#[source] Option<appwrite::Error>),
    #[error("Failed to persist user document")]
    Persistence(#[source] appwrite::Error),
}

/// One async mutex per email address.
///
/// Serializes the check-then-act sequence for concurrent submissions of the
/// same address within this process. Entries live for the process lifetime.
#[derive(Debug, Default)]
pub(crate) struct EmailLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl EmailLocks {
    pub(crate) async fn acquire(&self, email: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.entry(email.to_string()).or_default().clone()
        };

        lock.lock_owned().await
    }
}

/// Drives account creation against the hosted backend.
#[derive(Debug)]
pub struct AccountService {
    client: Arc<appwrite::Client>,
    database_id: String,
    users_collection_id: String,
    avatar_url: String,
    locks: EmailLocks,
}

impl AccountService {
    #[must_use]
    pub fn new(client: Arc<appwrite::Client>, globals: &GlobalArgs) -> Self {
        Self {
            client,
            database_id: globals.database_id.clone(),
            users_collection_id: globals.users_collection_id.clone(),
            avatar_url: globals.default_avatar_url.clone(),
            locks: EmailLocks::default(),
        }
    }

    /// Run the account workflow for an already-normalized email.
    ///
    /// Returns the opaque account identifier issued with the OTP.
    ///
    /// # Errors
    /// Returns the failing step as an [`AccountError`]; nothing is retried.
    #[instrument(skip(self))]
    pub async fn create_account(
        &self,
        full_name: &str,
        email: &str,
    ) -> Result<String, AccountError> {
        let _guard = self.locks.acquire(email).await;

        let existing_user = self.user_by_email(email).await.map_err(|err| {
            error!("Failed to look up user by email: {err}");
            AccountError::Lookup(err)
        })?;

        let token = self
            .client
            .create_email_token(&appwrite::unique_id(), email)
            .await
            .map_err(|err| {
                error!("Failed to send email OTP: {err}");
                AccountError::OtpIssuance(Some(err))
            })?;

        let account_id = token.user_id;
        if account_id.is_empty() {
            error!("Email OTP issuance returned no identifier");
            return Err(AccountError::OtpIssuance(None));
        }

        if existing_user.is_none() {
            let user = NewUser {
                full_name: full_name.to_string(),
                email: email.to_string(),
                avatar: self.avatar_url.clone(),
                account_id: account_id.clone(),
            };

            self.client
                .create_document(
                    &self.database_id,
                    &self.users_collection_id,
                    &appwrite::unique_id(),
                    &user,
                )
                .await
                .map_err(|err| {
                    error!("Failed to persist user document: {err}");
                    AccountError::Persistence(err)
                })?;
        } else {
            // The stored document keeps its original accountId; only the
            // response carries the fresh one.
            debug!("User already exists, skipping document creation");
        }

        Ok(account_id)
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<UserDocument>, appwrite::Error> {
        let queries = [Query::equal("email", email)];

        let list = self
            .client
            .list_documents(&self.database_id, &self.users_collection_id, &queries)
            .await?;

        if list.total == 0 {
            return Ok(None);
        }

        Ok(list.documents.into_iter().next())
    }
}
