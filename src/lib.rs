//! # posts-graphql - A minimal GraphQL server over in-memory posts
//!
//! Serves a fixed, read-only list of posts through a two-field GraphQL
//! schema. Identity is positional: a post's `id` is its index in the list.
//!
//! ## Quick Start
//!
//! ```bash
//! # Listen on the default port (4000), or whatever PORT says
//! posts-graphql
//!
//! # Print the schema
//! posts-graphql --print-schema
//! ```
//!
//! ```graphql
//! {
//!   posts { id author body }
//!   post(id: "0") { author }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and overrides
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP binding
//! - [`logging`]: Tracing subscriber setup
//! - [`model`]: Data models (`Post`, `PostId`)
//! - [`storage`]: The immutable post store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Reads an optional YAML file and applies CLI/environment overrides.
pub mod config;

/// Error types and result aliases.
///
/// Defines `PostsError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum router serving it.
pub mod graphql;

pub mod logging;

/// Data models for posts.
pub mod model;

/// In-memory storage layer.
pub mod storage;
