use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, ID, Object, Schema, ServerError};

use crate::error::PostsError;
use crate::model::PostId;
use crate::storage::PostStore;

use super::types::*;

pub type PostsSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Builds the schema over an immutable dataset.
pub fn build_schema(store: PostStore) -> PostsSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(Arc::new(store))
        .finish()
}

/// Renders the schema in SDL form.
pub fn export_sdl() -> String {
    build_schema(PostStore::default()).sdl()
}

fn rejected_id_error(ctx: &Context<'_>, error: &PostsError) -> ServerError {
    ctx.set_error_path(ServerError::new(error.to_string(), Some(ctx.item.pos)))
}

fn get_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<PostStore>> {
    ctx.data::<Arc<PostStore>>()
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// List every post in insertion order
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Option<Post>>>> {
        let store = get_store(ctx)?;
        // Published as `[Post]`: neither the list nor its items are non-null.
        Ok(Some(
            store
                .list()
                .map(|(id, post)| Some(Post::new(id, post)))
                .collect(),
        ))
    }

    /// Get a single post by ID. Unknown IDs resolve to null.
    async fn post(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Post>> {
        let store = get_store(ctx)?;
        let post_id = match id.parse::<PostId>() {
            Ok(post_id) => post_id,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected post lookup");
                // Report the error but keep `post: null` in the data.
                ctx.add_error(rejected_id_error(ctx, &e));
                return Ok(None);
            }
        };
        Ok(store.get(post_id).map(|post| Post::new(post_id, post)))
    }
}
