use sea_orm::DatabaseConnection;

use crate::server::{
    data::{course::CourseRepository, wishlist::WishlistRepository},
    error::AppError,
    model::wishlist::WishlistEntry,
};

pub struct WishlistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WishlistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Toggles a course in the student's wishlist.
    ///
    /// # Returns
    /// - `Ok(true)` - Course is in the wishlist after the call
    /// - `Ok(false)` - Course was removed
    /// - `Err(AppError::BadRequest)` - Unknown or unpublished course
    pub async fn toggle(&self, student_id: i32, course_id: i32) -> Result<bool, AppError> {
        let course = CourseRepository::new(self.db).get_by_id(course_id).await?;

        if course.filter(|c| c.is_published).is_none() {
            return Err(AppError::BadRequest(
                "Course is not available".to_string(),
            ));
        }

        Ok(WishlistRepository::new(self.db)
            .toggle(student_id, course_id)
            .await?)
    }

    /// Gets the student's wishlist, newest first
    pub async fn list(&self, student_id: i32) -> Result<Vec<WishlistEntry>, AppError> {
        let rows = WishlistRepository::new(self.db)
            .get_for_student(student_id)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(item, course)| course.map(|course| WishlistEntry { item, course }))
            .collect())
    }
}
