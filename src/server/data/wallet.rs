//! Wallet data repository for balance and transaction operations.
//!
//! Balance changes are single guarded UPDATE statements. The debit carries its
//! balance check in the WHERE clause, so the row either changes atomically or
//! not at all; there is no read-check-write window.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::wallet_transaction::Kind;

/// Repository providing database operations for wallets and their
/// transaction history.
pub struct WalletRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WalletRepository<'a> {
    /// Creates a new WalletRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a zero-balance wallet for a user.
    ///
    /// Called once at registration; the unique index on `user_id` rejects a
    /// second wallet for the same account.
    pub async fn create(&self, user_id: i32) -> Result<entity::wallet::Model, DbErr> {
        entity::wallet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            balance_cents: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a user's wallet.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Option<entity::wallet::Model>, DbErr> {
        entity::prelude::Wallet::find()
            .filter(entity::wallet::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Increments a wallet balance.
    ///
    /// # Arguments
    /// - `user_id` - Wallet owner
    /// - `amount_cents` - Positive amount to add
    ///
    /// # Returns
    /// - `Ok(true)` - Balance updated
    /// - `Ok(false)` - No wallet exists for the user
    /// - `Err(DbErr)` - Database error during update
    pub async fn credit(&self, user_id: i32, amount_cents: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::Wallet::update_many()
            .col_expr(
                entity::wallet::Column::BalanceCents,
                Expr::col(entity::wallet::Column::BalanceCents).add(amount_cents),
            )
            .filter(entity::wallet::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Decrements a wallet balance if funds suffice.
    ///
    /// The WHERE clause carries `balance_cents >= amount_cents`, so the update
    /// matches zero rows when the balance is too low and the wallet is left
    /// untouched. The balance can never go negative through this path.
    ///
    /// # Arguments
    /// - `user_id` - Wallet owner
    /// - `amount_cents` - Positive amount to subtract
    ///
    /// # Returns
    /// - `Ok(true)` - Balance updated
    /// - `Ok(false)` - Insufficient funds or no wallet for the user
    /// - `Err(DbErr)` - Database error during update
    pub async fn debit(&self, user_id: i32, amount_cents: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::Wallet::update_many()
            .col_expr(
                entity::wallet::Column::BalanceCents,
                Expr::col(entity::wallet::Column::BalanceCents).sub(amount_cents),
            )
            .filter(entity::wallet::Column::UserId.eq(user_id))
            .filter(entity::wallet::Column::BalanceCents.gte(amount_cents))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Records a transaction row for a wallet.
    ///
    /// Every successful credit or debit is followed by exactly one of these.
    pub async fn record_transaction(
        &self,
        wallet_id: i32,
        amount_cents: i64,
        kind: Kind,
        note: String,
    ) -> Result<entity::wallet_transaction::Model, DbErr> {
        entity::wallet_transaction::ActiveModel {
            wallet_id: ActiveValue::Set(wallet_id),
            amount_cents: ActiveValue::Set(amount_cents),
            kind: ActiveValue::Set(kind),
            note: ActiveValue::Set(note),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a wallet's transactions with pagination, newest first.
    ///
    /// # Returns
    /// - `Ok((transactions, total))` - Transactions for the page and total count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_transactions_paginated(
        &self,
        wallet_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::wallet_transaction::Model>, u64), DbErr> {
        let paginator = entity::prelude::WalletTransaction::find()
            .filter(entity::wallet_transaction::Column::WalletId.eq(wallet_id))
            .order_by_desc(entity::wallet_transaction::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let transactions = paginator.fetch_page(page).await?;

        Ok((transactions, total))
    }
}
