//! Comment data repository for threads and reactions.
//!
//! Reactions follow the membership-toggle model: one row per (comment, user),
//! toggled off by a repeat of the same reaction and switched by the opposite
//! one.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use entity::comment_reaction::Kind;

use crate::server::model::comment::CreateCommentParam;

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment or reply
    pub async fn create(&self, param: CreateCommentParam) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            course_id: ActiveValue::Set(param.course_id),
            author_id: ActiveValue::Set(param.author_id),
            parent_id: ActiveValue::Set(param.parent_id),
            content: ActiveValue::Set(param.content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a comment by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(id).one(self.db).await
    }

    /// Deletes a comment and, for root comments, its replies
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::ParentId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::Comment::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }

    /// Gets a course's root comments with authors, newest first
    pub async fn get_roots_for_course(
        &self,
        course_id: i32,
    ) -> Result<Vec<(entity::comment::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::CourseId.eq(course_id))
            .filter(entity::comment::Column::ParentId.is_null())
            .order_by_desc(entity::comment::Column::CreatedAt)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }

    /// Gets the replies to the given root comments with authors, oldest first
    pub async fn get_replies_for_roots(
        &self,
        root_ids: &[i32],
    ) -> Result<Vec<(entity::comment::Model, Option<entity::user::Model>)>, DbErr> {
        if root_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Comment::find()
            .filter(entity::comment::Column::ParentId.is_in(root_ids.to_vec()))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }

    /// Toggles a user's reaction on a comment.
    ///
    /// - no existing reaction: the new reaction is inserted
    /// - same reaction exists: it is removed
    /// - opposite reaction exists: it is switched
    ///
    /// # Returns
    /// - `Ok(Some(kind))`: The user's reaction after the toggle
    /// - `Ok(None)`: The toggle removed the reaction
    pub async fn toggle_reaction(
        &self,
        comment_id: i32,
        user_id: i32,
        kind: Kind,
    ) -> Result<Option<Kind>, DbErr> {
        let existing = entity::prelude::CommentReaction::find()
            .filter(entity::comment_reaction::Column::CommentId.eq(comment_id))
            .filter(entity::comment_reaction::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        match existing {
            Some(reaction) if reaction.kind == kind => {
                entity::prelude::CommentReaction::delete_by_id(reaction.id)
                    .exec(self.db)
                    .await?;
                Ok(None)
            }
            Some(reaction) => {
                let mut active_model: entity::comment_reaction::ActiveModel = reaction.into();
                active_model.kind = ActiveValue::Set(kind);
                active_model.update(self.db).await?;
                Ok(Some(kind))
            }
            None => {
                entity::comment_reaction::ActiveModel {
                    comment_id: ActiveValue::Set(comment_id),
                    user_id: ActiveValue::Set(user_id),
                    kind: ActiveValue::Set(kind),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
                Ok(Some(kind))
            }
        }
    }

    /// Gets all reactions for the given comments
    pub async fn get_reactions_for_comments(
        &self,
        comment_ids: &[i32],
    ) -> Result<Vec<entity::comment_reaction::Model>, DbErr> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::CommentReaction::find()
            .filter(entity::comment_reaction::Column::CommentId.is_in(comment_ids.to_vec()))
            .all(self.db)
            .await
    }
}
