use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PurchaseError {
    /// Every purchased seat is already assigned.
    ///
    /// The guarded increment matched no row, so `seats_used` is unchanged.
    /// Results in a 409 Conflict response.
    #[error("All seats on purchase {0} are in use")]
    SeatLimitReached(i32),

    /// Seat operation on a purchase whose checkout has not settled.
    ///
    /// Results in a 400 Bad Request response carrying the current status.
    #[error("Purchase is not paid (status: {0})")]
    NotPaid(String),

    /// The employee already holds a seat on this purchase.
    ///
    /// Results in a 409 Conflict response.
    #[error("Employee {employee_id} is already assigned to purchase {purchase_id}")]
    AlreadyAssigned {
        purchase_id: i32,
        employee_id: i32,
    },
}

/// Converts purchase errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Unpaid purchase
/// - 409 Conflict - Seat exhaustion or duplicate assignment
impl IntoResponse for PurchaseError {
    fn into_response(self) -> Response {
        match self {
            Self::SeatLimitReached(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "All purchased seats are in use.".to_string(),
                }),
            )
                .into_response(),
            Self::NotPaid(status) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!("Purchase has not been paid (status: {}).", status),
                }),
            )
                .into_response(),
            Self::AlreadyAssigned { .. } => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "This employee already has a seat on the purchase.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
