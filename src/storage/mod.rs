//! In-memory storage for posts.
//!
//! The dataset is built once at startup and never mutated. Identity is
//! positional: a post's ID is its index in the store.
//!
//! ## Components
//!
//! - [`PostStore`]: ordered, read-only collection of posts
//! - [`seed_posts`]: the built-in dataset used when no config overrides it

mod post_store;

pub use post_store::{PostStore, seed_posts};
