use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use validator::Validate;

use super::rules::validate_email;

pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";
// The rule is 4 characters; the message has always said 6.
pub const SHORT_PASSWORD_MESSAGE: &str = "Password must be at least 6 characters long";

/// Credentials sent to `POST /auth/login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "validate_email", message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 4, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub data: LoginData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    #[serde(
        rename = "teamId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub team_id: Option<String>,
}

impl LoginData {
    /// An empty `teamId` counts as no team.
    pub fn has_team(&self) -> bool {
        self.team_id
            .as_deref()
            .map(|id| !id.is_empty())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "INVALID_RESPONSE".to_string(),
            details: None,
        }
    }

    pub fn http_status(status: u16, body: Option<Value>) -> Self {
        Self {
            error: format!("Request failed with status {}", status),
            code: format!("HTTP_{}", status),
            details: body,
        }
    }
}
