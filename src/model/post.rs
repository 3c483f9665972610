use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PostsError;

/// A post record. Its identifier is not stored; it is the record's
/// position in the [`PostStore`](crate::storage::PostStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub author: String,
    pub body: String,
}

impl Post {
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
        }
    }
}

/// A parsed post identifier.
///
/// Any decimal integer is a well-formed identifier, including negative
/// ones, which simply never match a position. Anything else is rejected
/// with [`PostsError::InvalidId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostId(i64);

impl PostId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// The position this identifier refers to, if it can refer to one at all.
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl From<usize> for PostId {
    fn from(index: usize) -> Self {
        Self(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl FromStr for PostId {
    type Err = PostsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('-').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PostsError::InvalidId(s.to_string()));
        }
        match s.parse::<i64>() {
            Ok(value) => Ok(Self(value)),
            // Too large to ever be a position, but still a number.
            Err(_) if s.starts_with('-') => Ok(Self(i64::MIN)),
            Err(_) => Ok(Self(i64::MAX)),
        }
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
