use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        course::CourseSummaryDto,
        order::{PaginatedOrdersDto, PlaceOrderResultDto, StudentDashboardDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Check out the cart with wallet funds.
///
/// Debits the student wallet per cart line, credits each course's teacher,
/// writes completed orders, and clears the cart. The whole checkout fails on
/// the first line with insufficient funds, an unavailable course, or a course
/// the student already owns.
///
/// # Access Control
/// - `Student`
///
/// # Returns
/// - `201 Created` - Orders written by this checkout
/// - `400 Bad Request` - Empty cart, insufficient funds, unavailable or duplicate course
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a student
#[utoipa::path(
    post,
    path = "/api/student/orders",
    tag = ORDER_TAG,
    responses(
        (status = 201, description = "Cart checked out", body = PlaceOrderResultDto),
        (status = 400, description = "Cart empty, funds missing, or course unavailable", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let placed = OrderService::new(&state.db).place_order(user.id).await?;

    Ok((StatusCode::CREATED, Json(placed.into_dto())))
}

/// Get the order history, newest first.
///
/// # Access Control
/// - `Student`
#[utoipa::path(
    get,
    path = "/api/student/orders",
    tag = ORDER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "The caller's orders", body = PaginatedOrdersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let orders = OrderService::new(&state.db)
        .get_orders(user.id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto())))
}

/// Get the courses the student owns.
///
/// Every course the student has a completed order for, regardless of its
/// current catalog visibility.
///
/// # Access Control
/// - `Student`
#[utoipa::path(
    get,
    path = "/api/student/courses",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Owned courses", body = Vec<CourseSummaryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owned_courses(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let courses = OrderService::new(&state.db).owned_courses(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            courses
                .into_iter()
                .map(CourseSummaryDto::from_entity)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get the student dashboard aggregates.
///
/// Order count, total spend, wallet balance, wishlist size, and the most
/// recent orders in one response.
///
/// # Access Control
/// - `Student`
#[utoipa::path(
    get,
    path = "/api/student/dashboard",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Dashboard aggregates", body = StudentDashboardDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let dashboard = OrderService::new(&state.db).get_dashboard(user.id).await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}
