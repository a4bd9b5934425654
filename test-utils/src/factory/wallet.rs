//! Wallet factory for creating test wallet entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a wallet for `user_id` holding `balance_cents`.
pub async fn create_wallet(
    db: &DatabaseConnection,
    user_id: i32,
    balance_cents: i64,
) -> Result<entity::wallet::Model, DbErr> {
    entity::wallet::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        balance_cents: ActiveValue::Set(balance_cents),
        ..Default::default()
    }
    .insert(db)
    .await
}
