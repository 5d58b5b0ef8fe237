use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile stored under the `user` key by the login page.
///
/// Only `email` and `first_name` are read; everything else is kept as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl SessionUser {
    pub fn new(email: impl Into<String>, first_name: Option<&str>) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.map(str::to_string),
            extra: Map::new(),
        }
    }

    /// First name when it is non-empty, otherwise the email.
    pub fn display_name(&self) -> &str {
        self.first_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

impl Session {
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
