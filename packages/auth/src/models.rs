//! # Credential models
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserProfile`] | The signed-in user as returned by the auth service. The known fields are optional; anything else the service sends is kept in `extra` so it survives a trip through storage. |
//! | [`Credential`] | A finished login result: opaque token plus profile, handed to [`crate::AuthStore::login`]. |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile of the signed-in user.
///
/// Any JSON object deserializes: a known field holding something other than
/// a string is kept in `extra` under its own key instead of failing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for UserProfile {
    fn from(mut fields: Map<String, Value>) -> Self {
        let mut take = |key: &str| match fields.remove(key) {
            Some(Value::String(value)) => Some(value),
            Some(other) => {
                fields.insert(key.to_string(), other);
                None
            }
            None => None,
        };
        let email = take("email");
        let username = take("username");
        let avatar = take("avatar");
        Self {
            email,
            username,
            avatar,
            extra: fields,
        }
    }
}

impl UserProfile {
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }
}

/// Token and profile obtained from a successful login call.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    pub user: UserProfile,
}

impl Credential {
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}
