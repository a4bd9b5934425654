//! Subscription plan factory for creating test plans.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a 30-day plan priced at `price_cents`.
pub async fn create_plan(
    db: &DatabaseConnection,
    price_cents: i64,
) -> Result<entity::subscription_plan::Model, DbErr> {
    let id = next_id();
    entity::subscription_plan::ActiveModel {
        name: ActiveValue::Set(format!("Plan {}", id)),
        description: ActiveValue::Set("Unlimited access while active.".to_string()),
        price_cents: ActiveValue::Set(price_cents),
        duration_days: ActiveValue::Set(30),
        ..Default::default()
    }
    .insert(db)
    .await
}
