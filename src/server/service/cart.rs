use sea_orm::DatabaseConnection;

use crate::server::{
    data::{cart::CartRepository, course::CourseRepository},
    error::AppError,
    model::cart::{AddCartItemParam, Cart, CartLine},
};

pub struct CartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a course to the cart, or refreshes the existing line.
    ///
    /// Re-adding a course that is already in the cart updates its seat count
    /// and captures the current price instead of duplicating the line.
    ///
    /// # Returns
    /// - `Ok(CartLine)` - The inserted or refreshed line
    /// - `Err(AppError::BadRequest)` - Unknown/unpublished course or seats < 1
    pub async fn add(&self, param: AddCartItemParam) -> Result<CartLine, AppError> {
        if param.seats < 1 {
            return Err(AppError::BadRequest(
                "Seat count must be at least 1".to_string(),
            ));
        }

        let course = CourseRepository::new(self.db)
            .get_by_id(param.course_id)
            .await?;

        let Some(course) = course.filter(|c| c.is_published) else {
            return Err(AppError::BadRequest(
                "Course is not available for purchase".to_string(),
            ));
        };

        let item = CartRepository::new(self.db)
            .upsert_line(param, course.price_cents)
            .await?;

        Ok(CartLine {
            item,
            course_title: course.title,
        })
    }

    /// Gets the owner's cart with line and grand totals
    pub async fn get_cart(&self, owner_id: i32) -> Result<Cart, AppError> {
        let rows = CartRepository::new(self.db).get_for_owner(owner_id).await?;

        let lines = rows
            .into_iter()
            .map(|(item, course)| CartLine {
                item,
                course_title: course.map(|c| c.title).unwrap_or_default(),
            })
            .collect();

        Ok(Cart { lines })
    }

    /// Removes one course from the cart
    /// Returns false if the course was not in the cart
    pub async fn remove(&self, owner_id: i32, course_id: i32) -> Result<bool, AppError> {
        Ok(CartRepository::new(self.db).remove(owner_id, course_id).await?)
    }

    /// Empties the cart
    pub async fn clear(&self, owner_id: i32) -> Result<(), AppError> {
        CartRepository::new(self.db).clear(owner_id).await?;
        Ok(())
    }
}
