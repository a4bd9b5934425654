use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        admin::PlatformStatsDto, api::ErrorDto, user::PaginatedUsersDto, wallet::TopUpDto,
        wallet::WalletDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{GetAllUsersParam, Role},
        service::{user::UserService, wallet::WalletService},
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize)]
pub struct UserListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub role: Option<String>,
}

fn default_entries() -> u64 {
    10
}

/// Get all users with pagination and an optional role filter.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Users ordered by name with pagination metadata
/// - `400 Bad Request` - Unknown role filter
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("role" = Option<String>, Query, description = "Restrict to one role")
    ),
    responses(
        (status = 200, description = "User listing", body = PaginatedUsersDto),
        (status = 400, description = "Unknown role filter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<UserListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let role = match params.role.as_deref() {
        Some(value) => match Role::parse(value) {
            Some(role) => Some(role),
            None => {
                return Err(AppError::BadRequest(format!("Unknown role '{}'", value)));
            }
        },
        None => None,
    };

    let users = UserService::new(&state.db)
        .get_all_users(GetAllUsersParam {
            page: params.page,
            per_page: params.entries,
            role,
        })
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Block a user.
///
/// Blocked accounts fail every guarded request from their next call on, and
/// the flag shows in subsequent listings.
///
/// # Access Control
/// - `Admin` - Admins cannot block admins or themselves
#[utoipa::path(
    post,
    path = "/api/admin/users/{user_id}/block",
    tag = ADMIN_TAG,
    params(
        ("user_id" = i32, Path, description = "User to block")
    ),
    responses(
        (status = 204, description = "User blocked"),
        (status = 400, description = "Target is an admin or the caller", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn block_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db)
        .set_blocked(admin.id, user_id, true)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Unblock a user.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/users/{user_id}/unblock",
    tag = ADMIN_TAG,
    params(
        ("user_id" = i32, Path, description = "User to unblock")
    ),
    responses(
        (status = 204, description = "User unblocked"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unblock_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db)
        .set_blocked(admin.id, user_id, false)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Credit a user's wallet.
///
/// Admin top-up for support cases and manual settlements; the credit lands
/// with the provided note in the transaction history.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/users/{user_id}/wallet/credit",
    tag = ADMIN_TAG,
    params(
        ("user_id" = i32, Path, description = "Wallet owner")
    ),
    request_body = TopUpDto,
    responses(
        (status = 200, description = "Wallet after the credit", body = WalletDto),
        (status = 400, description = "Non-positive amount", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User has no wallet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn credit_wallet(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<TopUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let note = payload
        .note
        .unwrap_or_else(|| "Admin top-up".to_string());

    let wallet = WalletService::new(&state.db)
        .credit(user_id, payload.amount_cents, note)
        .await?;

    Ok((
        StatusCode::OK,
        Json(WalletDto {
            balance_cents: wallet.balance_cents,
        }),
    ))
}

/// Get platform-wide counters.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Platform counters", body = PlatformStatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let stats = UserService::new(&state.db).get_platform_stats().await?;

    Ok((StatusCode::OK, Json(stats)))
}
