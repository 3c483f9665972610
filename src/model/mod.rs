//! Data models for posts.
//!
//! - [`Post`]: a single record with an author and a body
//! - [`PostId`]: a position in the backing sequence, parsed from the
//!   external `ID` string

mod post;

pub use post::{Post, PostId};
