use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LessonDto {
    pub id: i32,
    pub module_id: i32,
    pub title: String,
    pub video_url: String,
    pub duration_secs: i32,
    pub position: i32,
}

impl LessonDto {
    /// Maps a lesson row into its response shape.
    pub fn from_entity(entity: entity::lesson::Model) -> Self {
        Self {
            id: entity.id,
            module_id: entity.module_id,
            title: entity.title,
            video_url: entity.video_url,
            duration_secs: entity.duration_secs,
            position: entity.position,
        }
    }
}

/// A module row without its lessons, returned by module mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ModuleDto {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    pub position: i32,
}

impl ModuleDto {
    /// Maps a module row into its response shape.
    pub fn from_entity(entity: entity::course_module::Model) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            title: entity.title,
            position: entity.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseModuleDto {
    pub id: i32,
    pub title: String,
    pub position: i32,
    pub lessons: Vec<LessonDto>,
}

/// Catalog listing row for a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseSummaryDto {
    pub id: i32,
    pub teacher_id: i32,
    pub title: String,
    pub category: String,
    pub price_cents: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl CourseSummaryDto {
    /// Maps a course row into its catalog listing shape.
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            teacher_id: entity.teacher_id,
            title: entity.title,
            category: entity.category,
            price_cents: entity.price_cents,
            is_published: entity.is_published,
            created_at: entity.created_at,
        }
    }
}

/// Full course detail with rendered description and ordered content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseDetailDto {
    pub id: i32,
    pub teacher_id: i32,
    pub teacher_name: String,
    pub title: String,
    pub description: String,
    pub description_html: String,
    pub category: String,
    pub price_cents: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub modules: Vec<CourseModuleDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCourseDto {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price_cents: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCourseDto {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price_cents: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateModuleDto {
    pub title: String,
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateModuleDto {
    pub title: String,
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLessonDto {
    pub title: String,
    pub video_url: String,
    pub duration_secs: i32,
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateLessonDto {
    pub title: String,
    pub video_url: String,
    pub duration_secs: i32,
    pub position: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedCoursesDto {
    pub courses: Vec<CourseSummaryDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
