use crate::account::DEFAULT_AVATAR_URL;
use secrecy::SecretString;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub endpoint: String,
    pub project_id: String,
    pub api_key: SecretString,
    pub database_id: String,
    pub users_collection_id: String,
    pub default_avatar_url: String,
    pub frontend_url: String,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            project_id: String::new(),
            api_key: SecretString::default(),
            database_id: String::new(),
            users_collection_id: String::new(),
            default_avatar_url: DEFAULT_AVATAR_URL.to_string(),
            frontend_url: String::new(),
        }
    }
}
