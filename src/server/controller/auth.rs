use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::auth::{LoginDto, RegisterDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{RegisterUserParam, Role},
        service::auth::AuthService,
        state::AppState,
    },
};

/// POST /api/auth/register - Create a student, teacher or company account
///
/// Creates the account and logs the new user in by storing their id in the
/// session. Student and teacher accounts receive a zero-balance wallet.
///
/// # Returns
/// - `201 Created`: UserDto for the new account
/// - `400 Bad Request`: Unknown role or admin registration attempt
/// - `409 Conflict`: Email already registered
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let Some(role) = Role::parse(&payload.role) else {
        return Err(AppError::BadRequest(format!(
            "Unknown role '{}'",
            payload.role
        )));
    };

    let service = AuthService::new(&state.db);
    let user = service
        .register(RegisterUserParam {
            email: payload.email,
            name: payload.name,
            password: payload.password,
            role,
        })
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// POST /api/auth/login - Authenticate with email and password
///
/// Verifies credentials and stores the user id in the session. Blocked
/// accounts are rejected even with correct credentials.
///
/// # Returns
/// - `200 OK`: UserDto for the logged-in account
/// - `401 Unauthorized`: Unknown email or wrong password
/// - `403 Forbidden`: Account is blocked
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);
    let user = service
        .verify_credentials(&payload.email, &payload.password)
        .await?;

    let auth_session = AuthSession::new(&session);
    auth_session.clear().await;
    auth_session.set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// POST /api/auth/logout - End the current session
///
/// # Returns
/// - `204 No Content`: Session cleared (also when no one was logged in)
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/user - Get the currently authenticated user
///
/// # Returns
/// - `200 OK`: UserDto for the session user
/// - `401 Unauthorized`: Not logged in
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
