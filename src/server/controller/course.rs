use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        course::{
            CourseDetailDto, CourseSummaryDto, CreateCourseDto, CreateLessonDto, CreateModuleDto,
            LessonDto, ModuleDto, PaginatedCoursesDto, UpdateCourseDto, UpdateLessonDto,
            UpdateModuleDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::course::{
            CreateCourseParam, CreateLessonParam, CreateModuleParam, UpdateCourseParam,
            UpdateLessonParam, UpdateModuleParam,
        },
        service::course::CourseService,
        state::AppState,
    },
};

/// Tag for grouping teacher course management endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// Create a new course.
///
/// Creates an unpublished course owned by the authenticated teacher. The
/// course stays out of the public catalog until it is published.
///
/// # Access Control
/// - `Teacher` - Only teachers can create courses
///
/// # Returns
/// - `201 Created` - Successfully created course
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a teacher
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/teacher/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Successfully created course", body = CourseSummaryDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a teacher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let service = CourseService::new(&state.db);

    let course = service
        .create(CreateCourseParam {
            teacher_id: user.id,
            title: payload.title,
            description: payload.description,
            category: payload.category,
            price_cents: payload.price_cents,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CourseSummaryDto::from_entity(course)),
    ))
}

/// Get the teacher's own courses.
///
/// Returns the authenticated teacher's courses with pagination, published or
/// not, newest first.
///
/// # Access Control
/// - `Teacher`
#[utoipa::path(
    get,
    path = "/api/teacher/courses",
    tag = COURSE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved courses", body = PaginatedCoursesDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a teacher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_courses(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let service = CourseService::new(&state.db);

    let courses = service
        .get_teacher_courses(user.id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(courses.into_dto())))
}

/// Get one of the teacher's own courses with full content.
///
/// # Access Control
/// - `Teacher` - And the course must be owned by the caller
#[utoipa::path(
    get,
    path = "/api/teacher/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved course detail", body = CourseDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_course_detail(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let service = CourseService::new(&state.db);

    let detail = service.get_detail_for_teacher(course_id, user.id).await?;

    match detail {
        Some(detail) => Ok((StatusCode::OK, Json(detail.into_dto()))),
        None => Err(AppError::NotFound("Course not found".to_string())),
    }
}

/// Update a course.
///
/// Replaces the course's editable fields. The course must belong to the
/// authenticated teacher.
///
/// # Access Control
/// - `Teacher` - And the course must be owned by the caller
#[utoipa::path(
    put,
    path = "/api/teacher/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Successfully updated course", body = CourseSummaryDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
    Json(payload): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let service = CourseService::new(&state.db);

    let course = service
        .update(
            user.id,
            UpdateCourseParam {
                id: course_id,
                title: payload.title,
                description: payload.description,
                category: payload.category,
                price_cents: payload.price_cents,
            },
        )
        .await?;

    match course {
        Some(course) => Ok((StatusCode::OK, Json(CourseSummaryDto::from_entity(course)))),
        None => Err(AppError::NotFound("Course not found".to_string())),
    }
}

/// Delete a course and its content.
///
/// # Access Control
/// - `Teacher` - And the course must be owned by the caller
#[utoipa::path(
    delete,
    path = "/api/teacher/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted course"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let service = CourseService::new(&state.db);

    let deleted = service.delete(course_id, user.id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// Publish a course into the public catalog.
///
/// # Access Control
/// - `Teacher` - And the course must be owned by the caller
#[utoipa::path(
    post,
    path = "/api/teacher/courses/{course_id}/publish",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Successfully published course"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn publish_course(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    set_published(state, session, course_id, true).await
}

/// Withdraw a course from the public catalog.
///
/// # Access Control
/// - `Teacher` - And the course must be owned by the caller
#[utoipa::path(
    post,
    path = "/api/teacher/courses/{course_id}/unpublish",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Successfully unpublished course"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unpublish_course(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    set_published(state, session, course_id, false).await
}

async fn set_published(
    state: AppState,
    session: Session,
    course_id: i32,
    published: bool,
) -> Result<StatusCode, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let service = CourseService::new(&state.db);

    let updated = service.set_published(course_id, user.id, published).await?;

    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// Add a module to a course.
///
/// # Access Control
/// - `Teacher` - And the course must be owned by the caller
pub async fn create_module(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
    Json(payload): Json<CreateModuleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let service = CourseService::new(&state.db);

    let module = service
        .create_module(
            user.id,
            CreateModuleParam {
                course_id,
                title: payload.title,
                position: payload.position,
            },
        )
        .await?;

    match module {
        Some(module) => Ok((StatusCode::CREATED, Json(ModuleDto::from_entity(module)))),
        None => Err(AppError::NotFound("Course not found".to_string())),
    }
}

/// Update a module.
///
/// # Access Control
/// - `Teacher` - And the owning course must belong to the caller
pub async fn update_module(
    State(state): State<AppState>,
    session: Session,
    Path(module_id): Path<i32>,
    Json(payload): Json<UpdateModuleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let service = CourseService::new(&state.db);

    let module = service
        .update_module(
            user.id,
            UpdateModuleParam {
                id: module_id,
                title: payload.title,
                position: payload.position,
            },
        )
        .await?;

    match module {
        Some(module) => Ok((StatusCode::OK, Json(ModuleDto::from_entity(module)))),
        None => Err(AppError::NotFound("Module not found".to_string())),
    }
}

/// Delete a module and its lessons.
///
/// # Access Control
/// - `Teacher` - And the owning course must belong to the caller
pub async fn delete_module(
    State(state): State<AppState>,
    session: Session,
    Path(module_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let deleted = CourseService::new(&state.db)
        .delete_module(module_id, user.id)
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// Add a lesson to a module.
///
/// # Access Control
/// - `Teacher` - And the owning course must belong to the caller
pub async fn create_lesson(
    State(state): State<AppState>,
    session: Session,
    Path(module_id): Path<i32>,
    Json(payload): Json<CreateLessonDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let service = CourseService::new(&state.db);

    let lesson = service
        .create_lesson(
            user.id,
            CreateLessonParam {
                module_id,
                title: payload.title,
                video_url: payload.video_url,
                duration_secs: payload.duration_secs,
                position: payload.position,
            },
        )
        .await?;

    match lesson {
        Some(lesson) => Ok((
            StatusCode::CREATED,
            Json(LessonDto::from_entity(lesson)),
        )),
        None => Err(AppError::NotFound("Module not found".to_string())),
    }
}

/// Update a lesson.
///
/// # Access Control
/// - `Teacher` - And the owning course must belong to the caller
pub async fn update_lesson(
    State(state): State<AppState>,
    session: Session,
    Path(lesson_id): Path<i32>,
    Json(payload): Json<UpdateLessonDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let service = CourseService::new(&state.db);

    let lesson = service
        .update_lesson(
            user.id,
            UpdateLessonParam {
                id: lesson_id,
                title: payload.title,
                video_url: payload.video_url,
                duration_secs: payload.duration_secs,
                position: payload.position,
            },
        )
        .await?;

    match lesson {
        Some(lesson) => Ok((
            StatusCode::OK,
            Json(LessonDto::from_entity(lesson)),
        )),
        None => Err(AppError::NotFound("Lesson not found".to_string())),
    }
}

/// Delete a lesson.
///
/// # Access Control
/// - `Teacher` - And the owning course must belong to the caller
pub async fn delete_lesson(
    State(state): State<AppState>,
    session: Session,
    Path(lesson_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let deleted = CourseService::new(&state.db)
        .delete_lesson(lesson_id, user.id)
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
