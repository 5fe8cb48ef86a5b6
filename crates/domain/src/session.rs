use derive_more::AsRef;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Active user session, persisted in the browser's local storage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
    pub token: AccessToken,
}

/// User record as returned by the auth backend.
///
/// Only the email address is interpreted. All other fields are opaque and
/// preserved verbatim across serialization round-trips.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    #[serde(default)]
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(AsRef, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    #[must_use]
    pub fn new(token: String) -> Self {
        Self(token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_user_preserves_opaque_fields() {
        let value = json!({
            "id": "d9428888-122b-11e1-b85c-61cd3cbb3210",
            "email": "alice@example.org",
            "role": "authenticated",
        });
        let user: User = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(user.email, "alice@example.org");
        assert_eq!(serde_json::to_value(&user).unwrap(), value);
    }

    #[test]
    fn test_user_without_email() {
        let user: User = serde_json::from_value(json!({})).unwrap();
        assert_eq!(user.email, "");
    }

    #[test]
    fn test_session_round_trip() {
        let session = Session {
            user: User {
                email: "alice@example.org".to_string(),
                extra: Map::new(),
            },
            token: AccessToken::new("opaque".to_string()),
        };
        let serialized = serde_json::to_string(&session).unwrap();
        assert_eq!(serde_json::from_str::<Session>(&serialized).unwrap(), session);
    }

    #[test]
    fn test_access_token_serializes_as_plain_string() {
        let token = AccessToken::new("opaque".to_string());
        assert_eq!(serde_json::to_value(&token).unwrap(), json!("opaque"));
        assert_eq!(token.as_ref(), "opaque");
    }
}
