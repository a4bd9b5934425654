//! Course domain models and parameters.

use crate::model::course::{
    CourseDetailDto, CourseModuleDto, CourseSummaryDto, LessonDto, PaginatedCoursesDto,
};

/// A module together with its lessons, ordered by position.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleContent {
    pub module: entity::course_module::Model,
    pub lessons: Vec<entity::lesson::Model>,
}

impl ModuleContent {
    pub fn into_dto(self) -> CourseModuleDto {
        CourseModuleDto {
            id: self.module.id,
            title: self.module.title,
            position: self.module.position,
            lessons: self
                .lessons
                .into_iter()
                .map(LessonDto::from_entity)
                .collect(),
        }
    }
}

/// Full course aggregate with teacher attribution and rendered description.
///
/// `description_html` is rendered by the service; the raw markdown travels
/// alongside it so editing clients can round-trip the source.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseDetail {
    pub course: entity::course::Model,
    pub teacher_name: String,
    pub description_html: String,
    pub modules: Vec<ModuleContent>,
}

impl CourseDetail {
    pub fn into_dto(self) -> CourseDetailDto {
        CourseDetailDto {
            id: self.course.id,
            teacher_id: self.course.teacher_id,
            teacher_name: self.teacher_name,
            title: self.course.title,
            description: self.course.description,
            description_html: self.description_html,
            category: self.course.category,
            price_cents: self.course.price_cents,
            is_published: self.course.is_published,
            created_at: self.course.created_at,
            modules: self.modules.into_iter().map(|m| m.into_dto()).collect(),
        }
    }
}

/// Paginated collection of catalog rows with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedCourses {
    pub courses: Vec<entity::course::Model>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedCourses {
    pub fn into_dto(self) -> PaginatedCoursesDto {
        PaginatedCoursesDto {
            courses: self
                .courses
                .into_iter()
                .map(CourseSummaryDto::from_entity)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for creating a course.
#[derive(Debug, Clone)]
pub struct CreateCourseParam {
    pub teacher_id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price_cents: i64,
}

/// Parameters for replacing a course's editable fields.
#[derive(Debug, Clone)]
pub struct UpdateCourseParam {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price_cents: i64,
}

/// Parameters for adding a module to a course.
#[derive(Debug, Clone)]
pub struct CreateModuleParam {
    pub course_id: i32,
    pub title: String,
    pub position: i32,
}

/// Parameters for replacing a module's editable fields.
#[derive(Debug, Clone)]
pub struct UpdateModuleParam {
    pub id: i32,
    pub title: String,
    pub position: i32,
}

/// Parameters for adding a lesson to a module.
#[derive(Debug, Clone)]
pub struct CreateLessonParam {
    pub module_id: i32,
    pub title: String,
    pub video_url: String,
    pub duration_secs: i32,
    pub position: i32,
}

/// Parameters for replacing a lesson's editable fields.
#[derive(Debug, Clone)]
pub struct UpdateLessonParam {
    pub id: i32,
    pub title: String,
    pub video_url: String,
    pub duration_secs: i32,
    pub position: i32,
}
