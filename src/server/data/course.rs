use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use chrono::Utc;

use crate::server::model::course::{CreateCourseParam, UpdateCourseParam};

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new unpublished course
    ///
    /// # Returns
    /// - `Ok(Model)`: The created course
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, param: CreateCourseParam) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            teacher_id: ActiveValue::Set(param.teacher_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            category: ActiveValue::Set(param.category),
            price_cents: ActiveValue::Set(param.price_cents),
            is_published: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a course by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find_by_id(id).one(self.db).await
    }

    /// Gets a course by ID together with its teacher row
    pub async fn get_with_teacher(
        &self,
        id: i32,
    ) -> Result<Option<(entity::course::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Course::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await
    }

    /// Gets several courses by id in one query
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::course::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Course::find()
            .filter(entity::course::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Replaces a course's editable fields
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated course
    /// - `Err(DbErr)`: Database error, including RecordNotFound
    pub async fn update(&self, param: UpdateCourseParam) -> Result<entity::course::Model, DbErr> {
        let course = entity::prelude::Course::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Course {} not found",
                param.id
            )))?;

        let mut active_model: entity::course::ActiveModel = course.into();
        active_model.title = ActiveValue::Set(param.title);
        active_model.description = ActiveValue::Set(param.description);
        active_model.category = ActiveValue::Set(param.category);
        active_model.price_cents = ActiveValue::Set(param.price_cents);

        active_model.update(self.db).await
    }

    /// Sets the published flag
    ///
    /// # Returns
    /// - `Ok(true)`: Flag updated
    /// - `Ok(false)`: No course with that id
    pub async fn set_published(&self, id: i32, published: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Course::update_many()
            .filter(entity::course::Column::Id.eq(id))
            .col_expr(
                entity::course::Column::IsPublished,
                sea_orm::sea_query::Expr::value(published),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a course by ID
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Course::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }

    /// Gets published courses with pagination and an optional category filter,
    /// newest first
    ///
    /// # Returns
    /// - `Ok((courses, total))`: Courses for the page and total matching count
    pub async fn get_published_paginated(
        &self,
        page: u64,
        per_page: u64,
        category: Option<&str>,
    ) -> Result<(Vec<entity::course::Model>, u64), DbErr> {
        let mut query = entity::prelude::Course::find()
            .filter(entity::course::Column::IsPublished.eq(true))
            .order_by_desc(entity::course::Column::CreatedAt);

        if let Some(category) = category {
            query = query.filter(entity::course::Column::Category.eq(category));
        }

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let courses = paginator.fetch_page(page).await?;

        Ok((courses, total))
    }

    /// Gets a teacher's courses with pagination, newest first, published or not
    pub async fn get_by_teacher_paginated(
        &self,
        teacher_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::course::Model>, u64), DbErr> {
        let paginator = entity::prelude::Course::find()
            .filter(entity::course::Column::TeacherId.eq(teacher_id))
            .order_by_desc(entity::course::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let courses = paginator.fetch_page(page).await?;

        Ok((courses, total))
    }

    /// Counts all courses
    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Course::find().count(self.db).await
    }
}
