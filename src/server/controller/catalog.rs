use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        course::{CourseDetailDto, PaginatedCoursesDto},
    },
    server::{error::AppError, service::course::CourseService, state::AppState},
};

/// Tag for grouping public catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

#[derive(Deserialize)]
pub struct CatalogParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub category: Option<String>,
}

fn default_entries() -> u64 {
    10
}

/// Get the public course catalog.
///
/// Returns a paginated list of published courses, newest first, optionally
/// filtered by category. Unpublished courses never appear here.
///
/// # Access Control
/// - Public, no authentication required
///
/// # Returns
/// - `200 OK` - Paginated list of published courses
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = CATALOG_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("category" = Option<String>, Query, description = "Restrict to one category")
    ),
    responses(
        (status = 200, description = "Successfully retrieved catalog page", body = PaginatedCoursesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_catalog(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let courses = service
        .get_catalog(params.page, params.entries, params.category.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(courses.into_dto())))
}

/// Get a published course's full detail.
///
/// Returns the course with its teacher's name, the description rendered to
/// HTML, and the module/lesson tree ordered by position.
///
/// # Access Control
/// - Public, no authentication required
///
/// # Returns
/// - `200 OK` - Course detail
/// - `404 Not Found` - Course missing or not published
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}",
    tag = CATALOG_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved course detail", body = CourseDetailDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_detail(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let detail = service.get_published_detail(course_id).await?;

    match detail {
        Some(detail) => Ok((StatusCode::OK, Json(detail.into_dto()))),
        None => Err(AppError::NotFound("Course not found".to_string())),
    }
}
