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
        wallet::{PaginatedTransactionsDto, WalletDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        service::wallet::WalletService,
        state::AppState,
    },
};

/// Tag for grouping wallet endpoints in OpenAPI documentation
pub static WALLET_TAG: &str = "wallet";

/// Get the wallet balance.
///
/// # Access Control
/// - Any authenticated user with a wallet (students and teachers)
///
/// # Returns
/// - `200 OK` - Current balance
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Account carries no wallet
#[utoipa::path(
    get,
    path = "/api/wallet",
    tag = WALLET_TAG,
    responses(
        (status = 200, description = "Current balance", body = WalletDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Account carries no wallet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_wallet(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let wallet = WalletService::new(&state.db).get(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(WalletDto {
            balance_cents: wallet.balance_cents,
        }),
    ))
}

/// Get the wallet transaction history, newest first.
///
/// # Access Control
/// - Any authenticated user with a wallet
#[utoipa::path(
    get,
    path = "/api/wallet/transactions",
    tag = WALLET_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Transaction history", body = PaginatedTransactionsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Account carries no wallet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let transactions = WalletService::new(&state.db)
        .get_transactions(user.id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(transactions.into_dto())))
}
