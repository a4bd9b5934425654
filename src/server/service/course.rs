use pulldown_cmark::{html, Parser};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{course::CourseRepository, course_content::CourseContentRepository},
    error::AppError,
    model::course::{
        CourseDetail, CreateCourseParam, CreateLessonParam, CreateModuleParam, ModuleContent,
        PaginatedCourses, UpdateCourseParam, UpdateLessonParam, UpdateModuleParam,
    },
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an unpublished course for a teacher
    pub async fn create(&self, param: CreateCourseParam) -> Result<entity::course::Model, AppError> {
        let repo = CourseRepository::new(self.db);
        let course = repo.create(param).await?;
        Ok(course)
    }

    /// Replaces a course's editable fields
    /// Returns None if the course doesn't exist or isn't owned by the teacher
    pub async fn update(
        &self,
        teacher_id: i32,
        param: UpdateCourseParam,
    ) -> Result<Option<entity::course::Model>, AppError> {
        let repo = CourseRepository::new(self.db);

        if !self.owned_by(param.id, teacher_id).await? {
            return Ok(None);
        }

        let course = repo.update(param).await?;
        Ok(Some(course))
    }

    /// Sets the published flag on a course
    /// Returns false if the course doesn't exist or isn't owned by the teacher
    pub async fn set_published(
        &self,
        course_id: i32,
        teacher_id: i32,
        published: bool,
    ) -> Result<bool, AppError> {
        let repo = CourseRepository::new(self.db);

        if !self.owned_by(course_id, teacher_id).await? {
            return Ok(false);
        }

        Ok(repo.set_published(course_id, published).await?)
    }

    /// Deletes a course and all of its content
    /// Returns false if the course doesn't exist or isn't owned by the teacher
    pub async fn delete(&self, course_id: i32, teacher_id: i32) -> Result<bool, AppError> {
        if !self.owned_by(course_id, teacher_id).await? {
            return Ok(false);
        }

        CourseContentRepository::new(self.db)
            .delete_content_for_course(course_id)
            .await?;
        CourseRepository::new(self.db).delete(course_id).await?;

        Ok(true)
    }

    /// Gets the public catalog: published courses with pagination and an
    /// optional category filter
    pub async fn get_catalog(
        &self,
        page: u64,
        per_page: u64,
        category: Option<&str>,
    ) -> Result<PaginatedCourses, AppError> {
        let repo = CourseRepository::new(self.db);

        let (courses, total) = repo.get_published_paginated(page, per_page, category).await?;
        let total_pages = total_pages(total, per_page);

        Ok(PaginatedCourses {
            courses,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets a teacher's own courses, published or not
    pub async fn get_teacher_courses(
        &self,
        teacher_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedCourses, AppError> {
        let repo = CourseRepository::new(self.db);

        let (courses, total) = repo
            .get_by_teacher_paginated(teacher_id, page, per_page)
            .await?;
        let total_pages = total_pages(total, per_page);

        Ok(PaginatedCourses {
            courses,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets the full course aggregate for public display.
    ///
    /// Unpublished courses are invisible here; owners use
    /// `get_detail_for_teacher`.
    pub async fn get_published_detail(
        &self,
        course_id: i32,
    ) -> Result<Option<CourseDetail>, AppError> {
        let detail = self.build_detail(course_id).await?;
        Ok(detail.filter(|d| d.course.is_published))
    }

    /// Gets the full course aggregate for its owner, published or not
    pub async fn get_detail_for_teacher(
        &self,
        course_id: i32,
        teacher_id: i32,
    ) -> Result<Option<CourseDetail>, AppError> {
        let detail = self.build_detail(course_id).await?;
        Ok(detail.filter(|d| d.course.teacher_id == teacher_id))
    }

    /// Adds a module to an owned course
    /// Returns None if the course doesn't exist or isn't owned by the teacher
    pub async fn create_module(
        &self,
        teacher_id: i32,
        param: CreateModuleParam,
    ) -> Result<Option<entity::course_module::Model>, AppError> {
        if !self.owned_by(param.course_id, teacher_id).await? {
            return Ok(None);
        }

        let module = CourseContentRepository::new(self.db)
            .create_module(param)
            .await?;
        Ok(Some(module))
    }

    /// Replaces a module's editable fields on an owned course
    pub async fn update_module(
        &self,
        teacher_id: i32,
        param: UpdateModuleParam,
    ) -> Result<Option<entity::course_module::Model>, AppError> {
        let content_repo = CourseContentRepository::new(self.db);

        let Some(module) = content_repo.get_module(param.id).await? else {
            return Ok(None);
        };
        if !self.owned_by(module.course_id, teacher_id).await? {
            return Ok(None);
        }

        let module = content_repo.update_module(param).await?;
        Ok(Some(module))
    }

    /// Deletes a module and its lessons from an owned course
    pub async fn delete_module(&self, module_id: i32, teacher_id: i32) -> Result<bool, AppError> {
        let content_repo = CourseContentRepository::new(self.db);

        let Some(module) = content_repo.get_module(module_id).await? else {
            return Ok(false);
        };
        if !self.owned_by(module.course_id, teacher_id).await? {
            return Ok(false);
        }

        content_repo.delete_module(module_id).await?;
        Ok(true)
    }

    /// Adds a lesson to a module on an owned course
    pub async fn create_lesson(
        &self,
        teacher_id: i32,
        param: CreateLessonParam,
    ) -> Result<Option<entity::lesson::Model>, AppError> {
        let content_repo = CourseContentRepository::new(self.db);

        let Some(module) = content_repo.get_module(param.module_id).await? else {
            return Ok(None);
        };
        if !self.owned_by(module.course_id, teacher_id).await? {
            return Ok(None);
        }

        let lesson = content_repo.create_lesson(param).await?;
        Ok(Some(lesson))
    }

    /// Replaces a lesson's editable fields on an owned course
    pub async fn update_lesson(
        &self,
        teacher_id: i32,
        param: UpdateLessonParam,
    ) -> Result<Option<entity::lesson::Model>, AppError> {
        let content_repo = CourseContentRepository::new(self.db);

        let Some(lesson) = content_repo.get_lesson(param.id).await? else {
            return Ok(None);
        };
        let Some(module) = content_repo.get_module(lesson.module_id).await? else {
            return Ok(None);
        };
        if !self.owned_by(module.course_id, teacher_id).await? {
            return Ok(None);
        }

        let lesson = content_repo.update_lesson(param).await?;
        Ok(Some(lesson))
    }

    /// Deletes a lesson from an owned course
    pub async fn delete_lesson(&self, lesson_id: i32, teacher_id: i32) -> Result<bool, AppError> {
        let content_repo = CourseContentRepository::new(self.db);

        let Some(lesson) = content_repo.get_lesson(lesson_id).await? else {
            return Ok(false);
        };
        let Some(module) = content_repo.get_module(lesson.module_id).await? else {
            return Ok(false);
        };
        if !self.owned_by(module.course_id, teacher_id).await? {
            return Ok(false);
        }

        content_repo.delete_lesson(lesson_id).await?;
        Ok(true)
    }

    /// Checks that a course exists and belongs to the teacher
    async fn owned_by(&self, course_id: i32, teacher_id: i32) -> Result<bool, AppError> {
        let course = CourseRepository::new(self.db).get_by_id(course_id).await?;
        Ok(course.is_some_and(|c| c.teacher_id == teacher_id))
    }

    /// Loads the course with teacher name and its ordered content tree
    async fn build_detail(&self, course_id: i32) -> Result<Option<CourseDetail>, AppError> {
        let course_repo = CourseRepository::new(self.db);
        let content_repo = CourseContentRepository::new(self.db);

        let Some((course, teacher)) = course_repo.get_with_teacher(course_id).await? else {
            return Ok(None);
        };

        let modules = content_repo.get_modules_for_course(course.id).await?;
        let module_ids: Vec<i32> = modules.iter().map(|m| m.id).collect();
        let lessons = content_repo.get_lessons_for_modules(&module_ids).await?;

        let mut lessons_by_module: HashMap<i32, Vec<entity::lesson::Model>> = HashMap::new();
        for lesson in lessons {
            lessons_by_module
                .entry(lesson.module_id)
                .or_default()
                .push(lesson);
        }

        let modules = modules
            .into_iter()
            .map(|module| {
                let lessons = lessons_by_module.remove(&module.id).unwrap_or_default();
                ModuleContent { module, lessons }
            })
            .collect();

        let description_html = render_markdown(&course.description);
        let teacher_name = teacher.map(|t| t.name).unwrap_or_default();

        Ok(Some(CourseDetail {
            course,
            teacher_name,
            description_html,
            modules,
        }))
    }
}

/// Renders course description markdown to HTML.
fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        (total as f64 / per_page as f64).ceil() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::render_markdown;

    /// Tests that markdown descriptions render to HTML.
    ///
    /// Expected: emphasis becomes a strong tag
    #[test]
    fn renders_markdown_description() {
        let html = render_markdown("Learn something **useful**.");
        assert!(html.contains("<strong>useful</strong>"));
    }
}
