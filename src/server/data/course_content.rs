use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::course::{
    CreateLessonParam, CreateModuleParam, UpdateLessonParam, UpdateModuleParam,
};

/// Repository for course content: modules and their lessons.
///
/// Content rows are always reached through their owning course, so ownership
/// checks happen in the service layer before any mutation lands here.
pub struct CourseContentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseContentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a module on a course
    pub async fn create_module(
        &self,
        param: CreateModuleParam,
    ) -> Result<entity::course_module::Model, DbErr> {
        entity::course_module::ActiveModel {
            course_id: ActiveValue::Set(param.course_id),
            title: ActiveValue::Set(param.title),
            position: ActiveValue::Set(param.position),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a module by ID
    pub async fn get_module(&self, id: i32) -> Result<Option<entity::course_module::Model>, DbErr> {
        entity::prelude::CourseModule::find_by_id(id).one(self.db).await
    }

    /// Gets a course's modules ordered by position
    pub async fn get_modules_for_course(
        &self,
        course_id: i32,
    ) -> Result<Vec<entity::course_module::Model>, DbErr> {
        entity::prelude::CourseModule::find()
            .filter(entity::course_module::Column::CourseId.eq(course_id))
            .order_by_asc(entity::course_module::Column::Position)
            .all(self.db)
            .await
    }

    /// Replaces a module's editable fields
    pub async fn update_module(
        &self,
        param: UpdateModuleParam,
    ) -> Result<entity::course_module::Model, DbErr> {
        let module = entity::prelude::CourseModule::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Module {} not found",
                param.id
            )))?;

        let mut active_model: entity::course_module::ActiveModel = module.into();
        active_model.title = ActiveValue::Set(param.title);
        active_model.position = ActiveValue::Set(param.position);

        active_model.update(self.db).await
    }

    /// Deletes a module and its lessons
    pub async fn delete_module(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Lesson::delete_many()
            .filter(entity::lesson::Column::ModuleId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::CourseModule::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes all modules and lessons belonging to a course
    pub async fn delete_content_for_course(&self, course_id: i32) -> Result<(), DbErr> {
        let module_ids: Vec<i32> = self
            .get_modules_for_course(course_id)
            .await?
            .into_iter()
            .map(|m| m.id)
            .collect();

        if !module_ids.is_empty() {
            entity::prelude::Lesson::delete_many()
                .filter(entity::lesson::Column::ModuleId.is_in(module_ids))
                .exec(self.db)
                .await?;
        }

        entity::prelude::CourseModule::delete_many()
            .filter(entity::course_module::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Creates a lesson in a module
    pub async fn create_lesson(
        &self,
        param: CreateLessonParam,
    ) -> Result<entity::lesson::Model, DbErr> {
        entity::lesson::ActiveModel {
            module_id: ActiveValue::Set(param.module_id),
            title: ActiveValue::Set(param.title),
            video_url: ActiveValue::Set(param.video_url),
            duration_secs: ActiveValue::Set(param.duration_secs),
            position: ActiveValue::Set(param.position),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a lesson by ID
    pub async fn get_lesson(&self, id: i32) -> Result<Option<entity::lesson::Model>, DbErr> {
        entity::prelude::Lesson::find_by_id(id).one(self.db).await
    }

    /// Gets all lessons for the given modules ordered by position
    pub async fn get_lessons_for_modules(
        &self,
        module_ids: &[i32],
    ) -> Result<Vec<entity::lesson::Model>, DbErr> {
        if module_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::ModuleId.is_in(module_ids.to_vec()))
            .order_by_asc(entity::lesson::Column::Position)
            .all(self.db)
            .await
    }

    /// Replaces a lesson's editable fields
    pub async fn update_lesson(
        &self,
        param: UpdateLessonParam,
    ) -> Result<entity::lesson::Model, DbErr> {
        let lesson = entity::prelude::Lesson::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Lesson {} not found",
                param.id
            )))?;

        let mut active_model: entity::lesson::ActiveModel = lesson.into();
        active_model.title = ActiveValue::Set(param.title);
        active_model.video_url = ActiveValue::Set(param.video_url);
        active_model.duration_secs = ActiveValue::Set(param.duration_secs);
        active_model.position = ActiveValue::Set(param.position);

        active_model.update(self.db).await
    }

    /// Deletes a lesson by ID
    pub async fn delete_lesson(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Lesson::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }
}
