use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct WishlistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WishlistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Toggles a course's wishlist membership for a student.
    ///
    /// Membership check then insert or delete, so at most one row exists per
    /// (student, course) pair.
    ///
    /// # Returns
    /// - `Ok(true)`: Course is in the wishlist after the call
    /// - `Ok(false)`: Course was removed
    pub async fn toggle(&self, student_id: i32, course_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::WishlistItem::find()
            .filter(entity::wishlist_item::Column::StudentId.eq(student_id))
            .filter(entity::wishlist_item::Column::CourseId.eq(course_id))
            .one(self.db)
            .await?;

        match existing {
            Some(item) => {
                entity::prelude::WishlistItem::delete_by_id(item.id)
                    .exec(self.db)
                    .await?;
                Ok(false)
            }
            None => {
                entity::wishlist_item::ActiveModel {
                    student_id: ActiveValue::Set(student_id),
                    course_id: ActiveValue::Set(course_id),
                    created_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
                Ok(true)
            }
        }
    }

    /// Gets a student's wishlist with courses, newest first
    pub async fn get_for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<(entity::wishlist_item::Model, Option<entity::course::Model>)>, DbErr> {
        entity::prelude::WishlistItem::find()
            .filter(entity::wishlist_item::Column::StudentId.eq(student_id))
            .order_by_desc(entity::wishlist_item::Column::CreatedAt)
            .find_also_related(entity::prelude::Course)
            .all(self.db)
            .await
    }

    /// Counts a student's wishlist entries
    pub async fn count_for_student(&self, student_id: i32) -> Result<u64, DbErr> {
        entity::prelude::WishlistItem::find()
            .filter(entity::wishlist_item::Column::StudentId.eq(student_id))
            .count(self.db)
            .await
    }
}
