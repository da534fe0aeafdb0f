use serde::{Deserialize, Serialize};

/// Registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

/// Authored content. `user_email` points at the author by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_email: String,
    pub created_at: String,
}

/// Reply to a post. Neither `post_id` nor `user_email` is checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub post_id: i64,
    pub user_email: String,
    pub created_at: String,
}
