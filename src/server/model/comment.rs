//! Comment domain models and parameters.

use entity::comment_reaction::Kind;

use crate::model::comment::{CommentDto, ReactionResultDto};

/// A comment with author attribution, reaction counts, and (for roots) its
/// replies oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentNode {
    pub comment: entity::comment::Model,
    pub author_name: String,
    pub likes: u64,
    pub dislikes: u64,
    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.comment.id,
            author_id: self.comment.author_id,
            author_name: self.author_name,
            content: self.comment.content,
            created_at: self.comment.created_at,
            likes: self.likes,
            dislikes: self.dislikes,
            replies: self.replies.into_iter().map(|r| r.into_dto()).collect(),
        }
    }
}

/// Reaction counts after a toggle, with the caller's resulting reaction.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionSummary {
    pub comment_id: i32,
    pub likes: u64,
    pub dislikes: u64,
    pub user_reaction: Option<Kind>,
}

impl ReactionSummary {
    pub fn into_dto(self) -> ReactionResultDto {
        ReactionResultDto {
            comment_id: self.comment_id,
            likes: self.likes,
            dislikes: self.dislikes,
            user_reaction: self.user_reaction.map(|k| {
                match k {
                    Kind::Like => "like",
                    Kind::Dislike => "dislike",
                }
                .to_string()
            }),
        }
    }
}

/// Parameters for posting a comment or reply.
#[derive(Debug, Clone)]
pub struct CreateCommentParam {
    pub course_id: i32,
    pub author_id: i32,
    pub content: String,
    pub parent_id: Option<i32>,
}
