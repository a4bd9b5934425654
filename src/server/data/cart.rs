use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::cart::AddCartItemParam;

pub struct CartRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a course to a cart, or refreshes the existing line.
    ///
    /// A cart holds at most one line per course. Re-adding updates the seat
    /// count and captures the course's current price instead of inserting a
    /// duplicate line item.
    ///
    /// # Arguments
    /// - `param`: Owner, course and seat count
    /// - `unit_price_cents`: The course's current price
    ///
    /// # Returns
    /// - `Ok(Model)`: The inserted or refreshed cart line
    /// - `Err(DbErr)`: Database error
    pub async fn upsert_line(
        &self,
        param: AddCartItemParam,
        unit_price_cents: i64,
    ) -> Result<entity::cart_item::Model, DbErr> {
        let existing = entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::OwnerId.eq(param.owner_id))
            .filter(entity::cart_item::Column::CourseId.eq(param.course_id))
            .one(self.db)
            .await?;

        match existing {
            Some(line) => {
                let mut active_model: entity::cart_item::ActiveModel = line.into();
                active_model.seats = ActiveValue::Set(param.seats);
                active_model.unit_price_cents = ActiveValue::Set(unit_price_cents);
                active_model.update(self.db).await
            }
            None => {
                entity::cart_item::ActiveModel {
                    owner_id: ActiveValue::Set(param.owner_id),
                    course_id: ActiveValue::Set(param.course_id),
                    seats: ActiveValue::Set(param.seats),
                    unit_price_cents: ActiveValue::Set(unit_price_cents),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Gets all cart lines for an owner together with their courses
    pub async fn get_for_owner(
        &self,
        owner_id: i32,
    ) -> Result<Vec<(entity::cart_item::Model, Option<entity::course::Model>)>, DbErr> {
        entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::OwnerId.eq(owner_id))
            .find_also_related(entity::prelude::Course)
            .all(self.db)
            .await
    }

    /// Removes one course from a cart
    ///
    /// # Returns
    /// - `Ok(true)`: A line was removed
    /// - `Ok(false)`: The course was not in the cart
    pub async fn remove(&self, owner_id: i32, course_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::OwnerId.eq(owner_id))
            .filter(entity::cart_item::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes every line from a cart
    pub async fn clear(&self, owner_id: i32) -> Result<(), DbErr> {
        entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::OwnerId.eq(owner_id))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
