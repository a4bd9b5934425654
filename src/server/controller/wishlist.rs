use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        wishlist::{WishlistItemDto, WishlistToggleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::wishlist::WishlistService,
        state::AppState,
    },
};

/// Tag for grouping wishlist endpoints in OpenAPI documentation
pub static WISHLIST_TAG: &str = "wishlist";

/// Toggle a course in the wishlist.
///
/// Adds the course if absent, removes it if present. At most one wishlist
/// entry exists per course.
///
/// # Access Control
/// - `Student`
///
/// # Returns
/// - `200 OK` - Resulting membership state
/// - `400 Bad Request` - Unknown or unpublished course
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a student
#[utoipa::path(
    post,
    path = "/api/student/wishlist/{course_id}",
    tag = WISHLIST_TAG,
    params(
        ("course_id" = i32, Path, description = "Course to toggle")
    ),
    responses(
        (status = 200, description = "Membership after the toggle", body = WishlistToggleDto),
        (status = 400, description = "Course not available", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_wishlist(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let in_wishlist = WishlistService::new(&state.db)
        .toggle(user.id, course_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(WishlistToggleDto {
            course_id,
            in_wishlist,
        }),
    ))
}

/// Get the wishlist, newest first.
///
/// # Access Control
/// - `Student`
#[utoipa::path(
    get,
    path = "/api/student/wishlist",
    tag = WISHLIST_TAG,
    responses(
        (status = 200, description = "The caller's wishlist", body = Vec<WishlistItemDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_wishlist(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let entries = WishlistService::new(&state.db).list(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            entries
                .into_iter()
                .map(|e| e.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
