//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
///
/// Defaults produce a published course priced at 4999 cents owned by the
/// given teacher.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    teacher_id: i32,
    title: String,
    description: String,
    category: String,
    price_cents: i64,
    is_published: bool,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory owned by `teacher_id`.
    ///
    /// Defaults:
    /// - title: `"Course {id}"`
    /// - description: short markdown paragraph
    /// - category: `"programming"`
    /// - price_cents: `4999`
    /// - is_published: `true`
    pub fn new(db: &'a DatabaseConnection, teacher_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            teacher_id,
            title: format!("Course {}", id),
            description: "Learn something **useful**.".to_string(),
            category: "programming".to_string(),
            price_cents: 4999,
            is_published: true,
        }
    }

    /// Sets the course title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the course category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the course price in cents.
    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = price_cents;
        self
    }

    /// Sets the published flag.
    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    /// Builds and inserts the course entity into the database.
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            teacher_id: ActiveValue::Set(self.teacher_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            category: ActiveValue::Set(self.category),
            price_cents: ActiveValue::Set(self.price_cents),
            is_published: ActiveValue::Set(self.is_published),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published course with default values for `teacher_id`.
pub async fn create_course(
    db: &DatabaseConnection,
    teacher_id: i32,
) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db, teacher_id).build().await
}
