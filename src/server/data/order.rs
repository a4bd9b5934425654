use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Status stored on orders settled from wallet funds.
pub const ORDER_STATUS_COMPLETED: &str = "completed";

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an order row
    pub async fn create(
        &self,
        student_id: i32,
        course_id: i32,
        amount_cents: i64,
        status: &str,
    ) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            course_id: ActiveValue::Set(course_id),
            amount_cents: ActiveValue::Set(amount_cents),
            status: ActiveValue::Set(status.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Checks whether a student already ordered a course
    pub async fn exists_for_student_course(
        &self,
        student_id: i32,
        course_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Order::find()
            .filter(entity::order::Column::StudentId.eq(student_id))
            .filter(entity::order::Column::CourseId.eq(course_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the course ids a student has ordered
    pub async fn owned_course_ids(&self, student_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Order::find()
            .select_only()
            .column(entity::order::Column::CourseId)
            .filter(entity::order::Column::StudentId.eq(student_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Gets a student's orders with pagination and course titles, newest first
    ///
    /// # Returns
    /// - `Ok((orders, total))`: Order/course pairs for the page and total count
    pub async fn get_paginated_by_student(
        &self,
        student_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<
        (
            Vec<(entity::order::Model, Option<entity::course::Model>)>,
            u64,
        ),
        DbErr,
    > {
        let query = entity::prelude::Order::find()
            .filter(entity::order::Column::StudentId.eq(student_id))
            .order_by_desc(entity::order::Column::CreatedAt);

        let total = query.clone().count(self.db).await?;
        let orders = query
            .find_also_related(entity::prelude::Course)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await?;

        Ok((orders, total))
    }

    /// Gets all of a student's orders with course titles, newest first.
    ///
    /// The dashboard aggregates over the full set, so no pagination here.
    pub async fn get_all_by_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<(entity::order::Model, Option<entity::course::Model>)>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::StudentId.eq(student_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .find_also_related(entity::prelude::Course)
            .all(self.db)
            .await
    }

    /// Counts all orders
    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Order::find().count(self.db).await
    }

    /// Gets every order amount for revenue aggregation
    pub async fn all_amounts(&self) -> Result<Vec<i64>, DbErr> {
        entity::prelude::Order::find()
            .select_only()
            .column(entity::order::Column::AmountCents)
            .into_tuple()
            .all(self.db)
            .await
    }
}
