use serde::{de::DeserializeOwned, Serialize};
use time::{
    format_description::well_known::{Iso8601, Rfc3339},
    macros::format_description,
    OffsetDateTime, PrimitiveDateTime,
};

use super::{Comment, Post, ResourceKind, User};
use crate::error::{ContractError, Result};

/// Anything carrying the textual `created_at` stamp.
pub trait Timestamped {
    fn created_at(&self) -> &str;

    /// Parses `created_at` as RFC 3339, falling back to a naive ISO 8601 or
    /// `YYYY-MM-DD HH:MM:SS[.fff]` stamp read as UTC. The stored text is left
    /// untouched.
    fn created_at_time(&self) -> Result<OffsetDateTime> {
        let value = self.created_at();
        let rfc3339_err = match OffsetDateTime::parse(value, &Rfc3339) {
            Ok(at) => return Ok(at),
            Err(e) => e,
        };
        parse_naive(value)
            .map(PrimitiveDateTime::assume_utc)
            .ok_or_else(|| ContractError::Timestamp {
                value: value.to_string(),
                source: rfc3339_err,
            })
    }
}

// Naive stamps carry no offset.
fn parse_naive(value: &str) -> Option<PrimitiveDateTime> {
    PrimitiveDateTime::parse(value, &Iso8601::DEFAULT)
        .or_else(|_| {
            PrimitiveDateTime::parse(
                value,
                format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
            )
        })
        .or_else(|_| {
            PrimitiveDateTime::parse(
                value,
                format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
            )
        })
        .ok()
}

/// A record addressable through one of the three resource collections.
pub trait Resource: Serialize + DeserializeOwned + Timestamped + Clone {
    const KIND: ResourceKind;

    fn id(&self) -> i64;

    fn into_record(self) -> Record;
}

/// Any one of the three records, chosen at runtime by [`ResourceKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    User(User),
    Post(Post),
    Comment(Comment),
}

impl Record {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Record::User(_) => User::KIND,
            Record::Post(_) => Post::KIND,
            Record::Comment(_) => Comment::KIND,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Record::User(u) => u.id,
            Record::Post(p) => p.id,
            Record::Comment(c) => c.id,
        }
    }
}

impl Timestamped for Record {
    fn created_at(&self) -> &str {
        match self {
            Record::User(u) => &u.created_at,
            Record::Post(p) => &p.created_at,
            Record::Comment(c) => &c.created_at,
        }
    }
}

macro_rules! impl_resource {
    ($ty:ident, $kind:expr) => {
        impl Timestamped for $ty {
            fn created_at(&self) -> &str {
                &self.created_at
            }
        }

        impl Resource for $ty {
            const KIND: ResourceKind = $kind;

            fn id(&self) -> i64 {
                self.id
            }

            fn into_record(self) -> Record {
                Record::$ty(self)
            }
        }

        impl From<$ty> for Record {
            fn from(value: $ty) -> Self {
                Record::$ty(value)
            }
        }
    };
}

impl_resource!(User, ResourceKind::Users);
impl_resource!(Post, ResourceKind::Posts);
impl_resource!(Comment, ResourceKind::Comments);
