//! Wallet domain models.

use crate::model::wallet::{PaginatedTransactionsDto, TransactionDto};

/// Paginated wallet transaction history, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedTransactions {
    pub transactions: Vec<entity::wallet_transaction::Model>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedTransactions {
    pub fn into_dto(self) -> PaginatedTransactionsDto {
        PaginatedTransactionsDto {
            transactions: self
                .transactions
                .into_iter()
                .map(TransactionDto::from_entity)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
