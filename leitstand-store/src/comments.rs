use leitstand_common::model::{
    Id,
    comment::{Comment, CreateComment},
    post::PostMarker,
};
use time::OffsetDateTime;
use tokio::sync::RwLock;

pub const COMMENT_AVATAR_PLACEHOLDER: &str = "https://placehold.co/40x40.png";

/// Append-only per-post comment log. `post_id` is trusted to have referenced
/// an existing post when the comment was written.
#[derive(Debug, Default)]
pub struct CommentStore {
    comments: RwLock<Vec<Comment>>,
}

impl CommentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_comments(comments: Vec<Comment>) -> Self {
        Self {
            comments: RwLock::new(comments),
        }
    }

    /// All comments on one post, newest first. Retrieval order comes from
    /// `created_at`, not insertion order.
    pub async fn list_for_post(&self, post_id: Id<PostMarker>) -> Vec<Comment> {
        let mut matching: Vec<Comment> = {
            let comments = self.comments.read().await;
            comments
                .iter()
                .filter(|comment| comment.post_id == post_id)
                .cloned()
                .collect()
        };

        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching
    }

    pub async fn add(&self, post_id: Id<PostMarker>, create: CreateComment) -> Comment {
        let comment = Comment {
            id: Id::random(),
            post_id,
            author_name: create.author_name,
            text: create.text,
            created_at: OffsetDateTime::now_utc(),
            avatar_url: Some(COMMENT_AVATAR_PLACEHOLDER.to_owned()),
        };

        let mut comments = self.comments.write().await;
        comments.push(comment.clone());

        comment
    }
}
