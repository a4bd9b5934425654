//! Comment factory for creating test comments and replies.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a root comment on `course_id` authored by `author_id`.
pub async fn create_comment(
    db: &DatabaseConnection,
    course_id: i32,
    author_id: i32,
    content: &str,
) -> Result<entity::comment::Model, DbErr> {
    entity::comment::ActiveModel {
        course_id: ActiveValue::Set(course_id),
        author_id: ActiveValue::Set(author_id),
        parent_id: ActiveValue::Set(None),
        content: ActiveValue::Set(content.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a reply to `parent` authored by `author_id`.
pub async fn create_reply(
    db: &DatabaseConnection,
    parent: &entity::comment::Model,
    author_id: i32,
    content: &str,
) -> Result<entity::comment::Model, DbErr> {
    entity::comment::ActiveModel {
        course_id: ActiveValue::Set(parent.course_id),
        author_id: ActiveValue::Set(author_id),
        parent_id: ActiveValue::Set(Some(parent.id)),
        content: ActiveValue::Set(content.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
