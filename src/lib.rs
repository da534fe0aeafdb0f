//! Shared data shapes for the posts/comments board: the three records,
//! the request and response bodies around them, and the resource labels
//! used to address their collections.

pub mod config;
pub mod error;
pub mod models;
pub mod shape;

pub use config::ContractConfig;
pub use error::{ContractError, Result};
pub use models::{Comment, Post, Record, Resource, ResourceKind, Timestamped, User};
