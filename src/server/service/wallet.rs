//! Wallet service for balance reads, credits, and guarded debits.
//!
//! The balance invariant lives in the repository's single-statement updates;
//! this layer validates amounts, resolves wallets, and writes the matching
//! transaction row after each successful change.

use sea_orm::DatabaseConnection;

use entity::wallet_transaction::Kind;

use crate::server::{
    data::wallet::WalletRepository,
    error::{wallet::WalletError, AppError},
    model::wallet::PaginatedTransactions,
};

pub struct WalletService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WalletService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's wallet.
    ///
    /// # Returns
    /// - `Ok(Model)` - The wallet row
    /// - `Err(AppError::WalletErr(NotFound))` - The account carries no wallet
    pub async fn get(&self, user_id: i32) -> Result<entity::wallet::Model, AppError> {
        WalletRepository::new(self.db)
            .get_by_user(user_id)
            .await?
            .ok_or_else(|| WalletError::NotFound(user_id).into())
    }

    /// Credits a wallet and records the transaction.
    ///
    /// # Arguments
    /// - `user_id` - Wallet owner
    /// - `amount_cents` - Positive amount to add
    /// - `note` - Human-readable reason stored on the transaction
    ///
    /// # Returns
    /// - `Ok(Model)` - The wallet after the credit
    /// - `Err(AppError::WalletErr(InvalidAmount))` - Non-positive amount
    /// - `Err(AppError::WalletErr(NotFound))` - No wallet for the user
    pub async fn credit(
        &self,
        user_id: i32,
        amount_cents: i64,
        note: String,
    ) -> Result<entity::wallet::Model, AppError> {
        if amount_cents <= 0 {
            return Err(WalletError::InvalidAmount(amount_cents).into());
        }

        let repo = WalletRepository::new(self.db);

        let Some(wallet) = repo.get_by_user(user_id).await? else {
            return Err(WalletError::NotFound(user_id).into());
        };

        repo.credit(user_id, amount_cents).await?;
        repo.record_transaction(wallet.id, amount_cents, Kind::Credit, note)
            .await?;

        self.get(user_id).await
    }

    /// Debits a wallet and records the transaction.
    ///
    /// The repository's guarded update refuses the debit when the balance is
    /// too low; nothing is written in that case.
    ///
    /// # Returns
    /// - `Ok(Model)` - The wallet after the debit
    /// - `Err(AppError::WalletErr(InvalidAmount))` - Non-positive amount
    /// - `Err(AppError::WalletErr(NotFound))` - No wallet for the user
    /// - `Err(AppError::WalletErr(InsufficientFunds))` - Balance below the amount
    pub async fn debit(
        &self,
        user_id: i32,
        amount_cents: i64,
        note: String,
    ) -> Result<entity::wallet::Model, AppError> {
        if amount_cents <= 0 {
            return Err(WalletError::InvalidAmount(amount_cents).into());
        }

        let repo = WalletRepository::new(self.db);

        let Some(wallet) = repo.get_by_user(user_id).await? else {
            return Err(WalletError::NotFound(user_id).into());
        };

        if !repo.debit(user_id, amount_cents).await? {
            return Err(WalletError::InsufficientFunds {
                requested_cents: amount_cents,
            }
            .into());
        }

        repo.record_transaction(wallet.id, amount_cents, Kind::Debit, note)
            .await?;

        self.get(user_id).await
    }

    /// Gets a user's transaction history, newest first
    pub async fn get_transactions(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedTransactions, AppError> {
        let repo = WalletRepository::new(self.db);

        let Some(wallet) = repo.get_by_user(user_id).await? else {
            return Err(WalletError::NotFound(user_id).into());
        };

        let (transactions, total) = repo
            .get_transactions_paginated(wallet.id, page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedTransactions {
            transactions,
            total,
            page,
            per_page,
            total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;
    use test_utils::factory::user::create_student;
    use test_utils::factory::wallet::create_wallet;

    /// Tests that a successful debit records exactly one transaction.
    ///
    /// Expected: Ok with the balance lowered and a single debit row
    #[tokio::test]
    async fn debit_records_transaction() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Wallet)
            .with_table(entity::prelude::WalletTransaction)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_student(db).await.unwrap();
        create_wallet(db, user.id, 1000).await.unwrap();

        let service = WalletService::new(db);
        let wallet = service
            .debit(user.id, 400, "Test debit".to_string())
            .await
            .unwrap();

        assert_eq!(wallet.balance_cents, 600);

        let history = service.get_transactions(user.id, 0, 10).await.unwrap();
        assert_eq!(history.total, 1);
        assert_eq!(history.transactions[0].kind, Kind::Debit);
        assert_eq!(history.transactions[0].amount_cents, 400);
    }

    /// Tests the insufficient-funds mapping.
    ///
    /// The refused debit writes no transaction row.
    ///
    /// Expected: Err(InsufficientFunds) with an empty history
    #[tokio::test]
    async fn maps_refused_debit_to_insufficient_funds() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Wallet)
            .with_table(entity::prelude::WalletTransaction)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_student(db).await.unwrap();
        create_wallet(db, user.id, 100).await.unwrap();

        let service = WalletService::new(db);
        let result = service.debit(user.id, 101, "Too much".to_string()).await;

        assert!(matches!(
            result,
            Err(AppError::WalletErr(WalletError::InsufficientFunds {
                requested_cents: 101
            }))
        ));

        let history = service.get_transactions(user.id, 0, 10).await.unwrap();
        assert_eq!(history.total, 0);
    }

    /// Tests amount validation on credits.
    ///
    /// Expected: Err(InvalidAmount) for zero and negative amounts
    #[tokio::test]
    async fn rejects_non_positive_amounts() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Wallet)
            .with_table(entity::prelude::WalletTransaction)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_student(db).await.unwrap();
        create_wallet(db, user.id, 100).await.unwrap();

        let service = WalletService::new(db);

        for amount in [0, -50] {
            let result = service.credit(user.id, amount, "Bad".to_string()).await;
            assert!(matches!(
                result,
                Err(AppError::WalletErr(WalletError::InvalidAmount(_)))
            ));
        }
    }

    /// Tests the missing-wallet mapping.
    ///
    /// Expected: Err(NotFound)
    #[tokio::test]
    async fn maps_missing_wallet_to_not_found() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Wallet)
            .with_table(entity::prelude::WalletTransaction)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_student(db).await.unwrap();

        let service = WalletService::new(db);
        let result = service.get(user.id).await;

        assert!(matches!(
            result,
            Err(AppError::WalletErr(WalletError::NotFound(_)))
        ));
    }
}
