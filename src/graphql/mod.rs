//! GraphQL schema, resolvers and HTTP binding for posts.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server (PORT defaults to 4000)
//! posts-graphql
//!
//! # Query it
//! curl -X POST localhost:4000/graphql \
//!   -H 'content-type: application/json' \
//!   -d '{"query":"{ posts { id author body } }"}'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `posts`, `post(id: ID!)`
//! - **Mutations**: none

mod schema;
mod server;
mod types;

pub use schema::{PostsSchema, QueryRoot, build_schema, export_sdl};
pub use server::{bind, graphiql_page, router, serve};
pub use types::*;
