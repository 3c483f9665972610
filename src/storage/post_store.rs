use crate::model::{Post, PostId};

/// The built-in dataset, in insertion order.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post::new("Glenn Lanzer", "Hello world"),
        Post::new("Katie Copp", "Hi, planet!"),
    ]
}

/// Ordered, immutable collection of posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn seeded() -> Self {
        Self::new(seed_posts())
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Every post paired with its ID, in insertion order.
    pub fn list(&self) -> impl Iterator<Item = (PostId, &Post)> {
        self.posts
            .iter()
            .enumerate()
            .map(|(index, post)| (PostId::from(index), post))
    }

    /// Looks up a post by position. Negative or out-of-range IDs miss.
    pub fn get(&self, id: PostId) -> Option<&Post> {
        id.index().and_then(|index| self.posts.get(index))
    }
}

impl From<Vec<Post>> for PostStore {
    fn from(posts: Vec<Post>) -> Self {
        Self::new(posts)
    }
}
