//! Wire types for the hosted backend's REST API.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// User document stored in the users collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub account_id: String,
}

/// Page of documents returned by a collection query.
#[derive(Debug, Deserialize)]
pub struct DocumentList {
    pub total: u64,
    pub documents: Vec<UserDocument>,
}

/// Fields of a user document about to be created.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub avatar: String,
    pub account_id: String,
}

/// Email token session issued by the backend.
///
/// Only `user_id` is consumed here; the secret is delivered to the user out
/// of band and never stored by this service.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailToken {
    pub user_id: String,
    #[serde(default)]
    pub secret: String,
    #[serde(default)]
    pub expire: String,
}

/// Error body returned by the backend on non-success responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) message: String,
}

/// Builder for the backend's JSON-encoded `queries[]` entries.
pub struct Query;

impl Query {
    /// Equality filter on a single attribute.
    #[must_use]
    pub fn equal(attribute: &str, value: &str) -> String {
        json!({
            "method": "equal",
            "attribute": attribute,
            "values": [value],
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_equal_encodes_attribute_and_values() {
        let query = Query::equal("email", "jane@example.com");
        let parsed: serde_json::Value = serde_json::from_str(&query).unwrap();
        assert_eq!(parsed["method"], "equal");
        assert_eq!(parsed["attribute"], "email");
        assert_eq!(parsed["values"][0], "jane@example.com");
    }

    #[test]
    fn user_document_deserializes_dollar_id() {
        let document: UserDocument = serde_json::from_str(
            r#"{
                "$id": "doc-1",
                "fullName": "Jane Doe",
                "email": "jane@example.com",
                "avatar": "https://img.test/a.png",
                "accountId": "otp-1"
            }"#,
        )
        .unwrap();
        assert_eq!(document.id, "doc-1");
        assert_eq!(document.full_name, "Jane Doe");
        assert_eq!(document.account_id, "otp-1");
    }

    #[test]
    fn new_user_serializes_camel_case() {
        let user = NewUser {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            avatar: "https://img.test/a.png".to_string(),
            account_id: "otp-1".to_string(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["fullName"], "Jane Doe");
        assert_eq!(value["accountId"], "otp-1");
    }
}
