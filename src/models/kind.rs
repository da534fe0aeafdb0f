use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{config::ContractConfig, error::ContractError};

/// Label for one of the three board entities. The serialized form doubles
/// as the URL path segment of the matching collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Users,
    Posts,
    Comments,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [Self::Users, Self::Posts, Self::Comments];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Posts => "posts",
            Self::Comments => "comments",
        }
    }

    /// `{prefix}/users/`
    pub fn collection_path(self, cfg: &ContractConfig) -> String {
        format!("{}/{}/", cfg.api_prefix, self.as_str())
    }

    /// `{prefix}/users/{id}`
    pub fn item_path(self, cfg: &ContractConfig, id: i64) -> String {
        format!("{}/{}/{}", cfg.api_prefix, self.as_str(), id)
    }
}

/// Comments are created under their post: `{prefix}/posts/{post_id}/comments/`.
pub fn post_comments_path(cfg: &ContractConfig, post_id: i64) -> String {
    format!(
        "{}/{}/{}/{}/",
        cfg.api_prefix,
        ResourceKind::Posts.as_str(),
        post_id,
        ResourceKind::Comments.as_str()
    )
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ContractError::UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_three_labels() {
        let labels: Vec<&str> = ResourceKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(labels, ["users", "posts", "comments"]);
    }

    #[test]
    fn serializes_as_lowercase_label() {
        for kind in ResourceKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
            let back: ResourceKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
        assert!(serde_json::from_str::<ResourceKind>("\"Users\"").is_err());
        assert!(serde_json::from_str::<ResourceKind>("\"likes\"").is_err());
    }

    #[test]
    fn parses_known_labels_only() {
        assert_eq!("posts".parse::<ResourceKind>().unwrap(), ResourceKind::Posts);
        let err = "user".parse::<ResourceKind>().unwrap_err();
        assert!(matches!(err, ContractError::UnknownKind(ref s) if s == "user"));
    }

    #[test]
    fn builds_paths_with_and_without_prefix() {
        let bare = ContractConfig::default();
        assert_eq!(ResourceKind::Users.collection_path(&bare), "/users/");
        assert_eq!(ResourceKind::Comments.item_path(&bare, 7), "/comments/7");

        let api = ContractConfig::with_prefix("/api/v1").unwrap();
        assert_eq!(ResourceKind::Posts.collection_path(&api), "/api/v1/posts/");
        assert_eq!(post_comments_path(&api, 3), "/api/v1/posts/3/comments/");
    }
}
