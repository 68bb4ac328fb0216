use serde::{Deserialize, Serialize};

use crate::constants::GRANT_TYPE_PASSWORD;

/// Form body for `POST /token`.
#[derive(Debug, Clone)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
    pub scope: Vec<String>,
}

impl TokenRequest {
    pub fn form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("username".to_string(), self.username.clone()),
            ("password".to_string(), self.password.clone()),
            ("grant_type".to_string(), GRANT_TYPE_PASSWORD.to_string()),
            ("scope".to_string(), self.scope.join(" ")),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Refresh responses must carry a new access token; a rotated refresh token is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub detail: serde_json::Value,
}

impl ErrorDetail {
    /// Server errors carry either a plain `detail` string or a validation list.
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_request_joins_scopes() {
        let request = TokenRequest {
            username: "root".to_string(),
            password: "secret".to_string(),
            scope: vec!["clients:read".to_string(), "clients:write".to_string()],
        };
        let fields = request.form_fields();
        assert!(fields.contains(&("grant_type".to_string(), "password".to_string())));
        assert!(fields.contains(&("scope".to_string(), "clients:read clients:write".to_string())));
    }

    #[test]
    fn empty_scope_is_sent_as_empty_string() {
        let request = TokenRequest {
            username: "root".to_string(),
            password: "secret".to_string(),
            scope: Vec::new(),
        };
        assert!(request
            .form_fields()
            .contains(&("scope".to_string(), String::new())));
    }

    #[test]
    fn refresh_response_allows_missing_refresh_token() {
        let parsed: RefreshResponse =
            serde_json::from_str(r#"{"access_token":"A"}"#).expect("parse refresh");
        assert_eq!(parsed.access_token, "A");
        assert!(parsed.refresh_token.is_none());
    }

    #[test]
    fn error_detail_handles_string_and_list() {
        let plain: ErrorDetail =
            serde_json::from_str(r#"{"detail":"Invalid credentials"}"#).expect("parse detail");
        assert_eq!(plain.message(), "Invalid credentials");

        let list: ErrorDetail =
            serde_json::from_str(r#"{"detail":[{"msg":"field required"}]}"#).expect("parse list");
        assert!(list.message().contains("field required"));
    }
}
