//! Thin client for the hosted backend's REST API.
//!
//! The service consumes three capabilities: query documents in a collection
//! by equality filter, issue an email one-time token, and create a document.
//! Every request is authenticated with the project id and a server API key;
//! the store and the token mechanism are owned by the backend, never by this
//! service.

pub mod types;

use anyhow::{anyhow, Result};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;
use uuid::Uuid;

use types::{DocumentList, EmailToken, ErrorBody, NewUser, UserDocument};

#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{status}: {message}")]
    Api { status: StatusCode, message: String },
    #[error("invalid response body")]
    InvalidResponse,
}

/// Generate a fresh identifier for backend entities (token user ids,
/// document ids). Stands in for the platform's server-side id generation.
#[must_use]
pub fn unique_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    api_key: SecretString,
}

impl Client {
    /// Build a backend client from the configured endpoint and credentials.
    ///
    /// # Errors
    /// Returns an error if the endpoint is not a usable http(s) URL or the
    /// underlying HTTP client cannot be constructed.
    pub fn new(endpoint: &str, project_id: &str, api_key: SecretString) -> Result<Self> {
        let base_url = endpoint_base(endpoint)?;

        let client = reqwest::Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url,
            project_id: project_id.to_string(),
            api_key,
        })
    }

    /// Query a collection, filtered by the given `queries[]` entries.
    #[instrument(skip(self, queries))]
    pub async fn list_documents(
        &self,
        database_id: &str,
        collection_id: &str,
        queries: &[String],
    ) -> Result<DocumentList, Error> {
        let mut request = self.request(
            reqwest::Method::GET,
            &format!("/v1/databases/{database_id}/collections/{collection_id}/documents"),
        );

        for query in queries {
            request = request.query(&[("queries[]", query)]);
        }

        let response = request.send().await?;

        parse(response).await
    }

    /// Issue an email one-time token for the given address.
    ///
    /// The returned `userId` is the opaque account identifier; the token
    /// secret itself is emailed to the user by the backend.
    #[instrument(skip(self))]
    pub async fn create_email_token(
        &self,
        user_id: &str,
        email: &str,
    ) -> Result<EmailToken, Error> {
        let payload = json!({
            "userId": user_id,
            "email": email,
        });

        let response = self
            .request(reqwest::Method::POST, "/v1/account/tokens/email")
            .json(&payload)
            .send()
            .await?;

        parse(response).await
    }

    /// Create a document with the given id and field map.
    #[instrument(skip(self, user))]
    pub async fn create_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        user: &NewUser,
    ) -> Result<UserDocument, Error> {
        let payload = json!({
            "documentId": document_id,
            "data": user,
        });

        let response = self
            .request(
                reqwest::Method::POST,
                &format!("/v1/databases/{database_id}/collections/{collection_id}/documents"),
            )
            .json(&payload)
            .send()
            .await?;

        parse(response).await
    }

    /// Check backend reachability, used by the `/health` handler.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<(), Error> {
        let response = self.request(reqwest::Method::GET, "/v1/health").send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(response).await;
            return Err(Error::Api { status, message });
        }

        Ok(())
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, format!("{}{path}", self.base_url))
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Key", self.api_key.expose_secret())
    }
}

async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
    let status = response.status();

    if !status.is_success() {
        let message = error_message(response).await;
        return Err(Error::Api { status, message });
    }

    response.json().await.map_err(|err| {
        debug!("Failed to decode backend response: {err}");
        Error::InvalidResponse
    })
}

async fn error_message(response: reqwest::Response) -> String {
    response
        .json::<ErrorBody>()
        .await
        .map(|body| body.message)
        .unwrap_or_default()
}

fn endpoint_base(endpoint: &str) -> Result<String> {
    let url = Url::parse(endpoint)?;

    let scheme = url.scheme();

    let host = url
        .host()
        .ok_or_else(|| anyhow!("Error parsing URL: no host specified"))?
        .to_owned();

    let port = match url.port() {
        Some(p) => p,
        None => match scheme {
            "http" => 80,
            "https" => 443,
            _ => return Err(anyhow!("Error parsing URL: unsupported scheme {}", scheme)),
        },
    };

    Ok(format!("{scheme}://{host}:{port}"))
}
