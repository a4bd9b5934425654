use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    ///
    /// The caller has not logged in or the session has expired. Results in a
    /// 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// Session references a user that no longer exists.
    ///
    /// The account was deleted after the session was issued. Results in a
    /// 401 Unauthorized response so the client discards the stale session.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Account has been blocked by an admin.
    ///
    /// Blocked accounts fail every guarded request. Results in a 403 Forbidden
    /// response.
    #[error("User {0} is blocked")]
    AccountBlocked(i32),

    /// Caller's role does not satisfy the endpoint's permission requirement.
    ///
    /// Results in a 403 Forbidden response. The detail message is logged, not
    /// returned.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Login with an unknown email or a wrong password.
    ///
    /// Deliberately indistinguishable to the client. Results in a
    /// 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration with an email that already has an account.
    ///
    /// Results in a 409 Conflict response.
    #[error("Email is already registered")]
    EmailTaken,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing error
/// messages. Internal identifiers are logged at debug level while client-facing
/// messages stay generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - Missing/stale sessions and bad credentials
/// - 403 Forbidden - Blocked accounts and role mismatches
/// - 409 Conflict - Duplicate registration email
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in to do that.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password.".to_string(),
                }),
            )
                .into_response(),
            Self::AccountBlocked(user_id) => {
                tracing::debug!("Blocked user {} attempted a guarded request", user_id);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "This account has been blocked.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(user_id, detail) => {
                tracing::debug!("Access denied for user {}: {}", user_id, detail);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You don't have permission to do that.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::EmailTaken => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "An account with this email already exists.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
