use std::fmt;

use serde::{Deserialize, Serialize};

/// Body for account registration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body for login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub content: String,
}

/// Issued after register or login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

/// Acknowledgement returned by create and delete calls. Only post creation
/// fills `post_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<i64>,
}

// Secrets stay out of logs.

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn debug_hides_secrets() {
        let body = NewUser {
            name: "Alice".into(),
            email: "a@x.com".into(),
            password: "hunter2-hunter2".into(),
        };
        let out = format!("{body:?}");
        assert!(out.contains("a@x.com"));
        assert!(!out.contains("hunter2"));

        let creds = Credentials {
            email: "a@x.com".into(),
            password: "hunter2-hunter2".into(),
        };
        assert!(!format!("{creds:?}").contains("hunter2"));

        let token = Token {
            access_token: "eyJhbGciOi.secret".into(),
            token_type: "bearer".into(),
        };
        let out = format!("{token:?}");
        assert!(out.contains("bearer"));
        assert!(!out.contains("eyJhbGciOi"));
    }

    #[test]
    fn password_still_goes_over_the_wire() {
        let creds = Credentials {
            email: "a@x.com".into(),
            password: "pw".into(),
        };
        let value = serde_json::to_value(&creds).unwrap();
        assert_eq!(value, json!({"email": "a@x.com", "password": "pw"}));
    }

    #[test]
    fn message_post_id_is_optional() {
        let deleted: Message =
            serde_json::from_value(json!({"message": "Post deleted successfully"})).unwrap();
        assert_eq!(deleted.post_id, None);
        assert_eq!(
            serde_json::to_value(&deleted).unwrap(),
            json!({"message": "Post deleted successfully"})
        );

        let created: Message = serde_json::from_value(
            json!({"message": "Post created successfully", "post_id": 42}),
        )
        .unwrap();
        assert_eq!(created.post_id, Some(42));
    }
}
