use crate::model::{Post as ModelPost, PostId};
use async_graphql::{ID, SimpleObject};

/// A post as exposed over GraphQL. Every field is nullable.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct Post {
    /// Position of the post in the dataset
    pub id: Option<ID>,
    pub author: Option<String>,
    pub body: Option<String>,
}

impl Post {
    pub fn new(id: PostId, post: &ModelPost) -> Self {
        Self {
            id: Some(ID(id.to_string())),
            author: Some(post.author.clone()),
            body: Some(post.body.clone()),
        }
    }
}
