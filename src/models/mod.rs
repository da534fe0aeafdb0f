mod dto;
mod kind;
mod records;
mod resource;

pub use dto::{Credentials, Message, NewComment, NewPost, NewUser, Token};
pub use kind::{post_comments_path, ResourceKind};
pub use records::{Comment, Post, User};
pub use resource::{Record, Resource, Timestamped};
