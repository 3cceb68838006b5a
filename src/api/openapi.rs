use crate::api::handlers::{auth, health};
use utoipa::OpenApi;

/// OpenAPI document assembled from the handler annotations.
///
/// Add new endpoints to `paths(...)` so they are both served and documented;
/// undocumented routes (`/`, `OPTIONS /health`) stay out on purpose.
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        auth::sign_up::sign_up,
        auth::sign_in::sign_in,
    ),
    components(schemas(
        health::Health,
        auth::AccountCreated,
        auth::sign_up::SignUpRequest,
        auth::sign_in::SignInRequest,
    )),
    tags(
        (name = "auth", description = "Sign-up and sign-in submission"),
        (name = "health", description = "Service and backend health")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_documents_auth_and_health_paths() {
        let spec = ApiDoc::openapi();
        assert!(spec.paths.paths.contains_key("/v1/auth/sign-up"));
        assert!(spec.paths.paths.contains_key("/v1/auth/sign-in"));
        assert!(spec.paths.paths.contains_key("/health"));
    }

    #[test]
    fn openapi_tags_present() {
        let spec = ApiDoc::openapi();
        let tags = spec.tags.clone().unwrap_or_default();
        assert!(tags.iter().any(|tag| tag.name == "auth"));
        assert!(tags.iter().any(|tag| tag.name == "health"));
    }
}
