use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload for posting a comment or a reply.
///
/// `parent_id` present means the comment is a reply; replies to replies are
/// rejected.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentDto {
    pub content: String,
    pub parent_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub author_id: i32,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub likes: u64,
    pub dislikes: u64,
    pub replies: Vec<CommentDto>,
}

/// Reaction counts after a like/dislike toggle, including the caller's
/// resulting reaction if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReactionResultDto {
    pub comment_id: i32,
    pub likes: u64,
    pub dislikes: u64,
    pub user_reaction: Option<String>,
}
