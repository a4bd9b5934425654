use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WalletDto {
    pub balance_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransactionDto {
    pub id: i32,
    pub amount_cents: i64,
    pub kind: String,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

impl TransactionDto {
    /// Maps a wallet transaction row into its response shape.
    pub fn from_entity(entity: entity::wallet_transaction::Model) -> Self {
        Self {
            id: entity.id,
            amount_cents: entity.amount_cents,
            kind: match entity.kind {
                entity::wallet_transaction::Kind::Credit => "credit".to_string(),
                entity::wallet_transaction::Kind::Debit => "debit".to_string(),
            },
            note: entity.note,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedTransactionsDto {
    pub transactions: Vec<TransactionDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Payload for the admin wallet top-up endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopUpDto {
    pub amount_cents: i64,
    pub note: Option<String>,
}
