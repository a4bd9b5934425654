use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum WalletError {
    /// Debit larger than the current balance.
    ///
    /// The guarded update matched no row, so the balance is unchanged.
    /// Results in a 400 Bad Request response.
    #[error("Insufficient funds: attempted to debit {requested_cents} cents")]
    InsufficientFunds {
        /// The debit amount that was refused.
        requested_cents: i64,
    },

    /// No wallet row exists for the user.
    ///
    /// Wallets are created at registration, so this indicates the account role
    /// carries no wallet. Results in a 404 Not Found response.
    #[error("No wallet found for user {0}")]
    NotFound(i32),

    /// Zero or negative amount passed to credit or debit.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Wallet amounts must be positive, got {0}")]
    InvalidAmount(i64),
}

/// Converts wallet errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Insufficient funds or non-positive amounts
/// - 404 Not Found - Missing wallet
impl IntoResponse for WalletError {
    fn into_response(self) -> Response {
        match self {
            Self::InsufficientFunds { .. } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Insufficient wallet balance.".to_string(),
                }),
            )
                .into_response(),
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Wallet not found.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidAmount(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Amount must be a positive number of cents.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
