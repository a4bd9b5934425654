use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionPlanDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub duration_days: i32,
}

impl SubscriptionPlanDto {
    /// Maps a plan row into its response shape.
    pub fn from_entity(entity: entity::subscription_plan::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price_cents: entity.price_cents,
            duration_days: entity.duration_days,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpsertPlanDto {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub duration_days: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionStatusDto {
    pub plan: Option<SubscriptionPlanDto>,
    pub expires_at: Option<DateTime<Utc>>,
}
