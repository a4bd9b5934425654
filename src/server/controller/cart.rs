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
        cart::{AddCartItemDto, CartDto, CartItemDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{cart::AddCartItemParam, user::Role},
        service::cart::CartService,
        state::AppState,
    },
};

/// Tag for grouping cart endpoints in OpenAPI documentation
pub static CART_TAG: &str = "cart";

/// Add a course to the cart.
///
/// Adding a course that is already in the cart updates the seat count and
/// refreshes the captured price instead of creating a second line.
///
/// # Access Control
/// - Any authenticated user (students buy one seat; companies may carry more)
///
/// # Returns
/// - `200 OK` - The inserted or refreshed line
/// - `400 Bad Request` - Unknown/unpublished course or seats < 1
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cart",
    tag = CART_TAG,
    request_body = AddCartItemDto,
    responses(
        (status = 200, description = "Line inserted or refreshed", body = CartItemDto),
        (status = 400, description = "Course not available or invalid seats", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddCartItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    // Students buy a single seat; bulk seat counts are a company concern
    let seats = if user.role == Role::Student {
        1
    } else {
        payload.seats
    };

    let service = CartService::new(&state.db);

    let line = service
        .add(AddCartItemParam {
            owner_id: user.id,
            course_id: payload.course_id,
            seats,
        })
        .await?;

    Ok((StatusCode::OK, Json(line.into_dto())))
}

/// Get the cart with line and grand totals.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/cart",
    tag = CART_TAG,
    responses(
        (status = 200, description = "The caller's cart", body = CartDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let cart = CartService::new(&state.db).get_cart(user.id).await?;

    Ok((StatusCode::OK, Json(cart.into_dto())))
}

/// Remove one course from the cart.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    delete,
    path = "/api/cart/{course_id}",
    tag = CART_TAG,
    params(
        ("course_id" = i32, Path, description = "Course to remove")
    ),
    responses(
        (status = 204, description = "Line removed"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Course was not in the cart", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let removed = CartService::new(&state.db).remove(user.id, course_id).await?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// Empty the cart.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    delete,
    path = "/api/cart",
    tag = CART_TAG,
    responses(
        (status = 204, description = "Cart emptied"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    CartService::new(&state.db).clear(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
