//! Subscription plan domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::subscription::{SubscriptionPlanDto, SubscriptionStatusDto};

/// Parameters for creating or replacing a plan.
#[derive(Debug, Clone)]
pub struct UpsertPlanParam {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub duration_days: i32,
}

/// A student's current subscription, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionStatus {
    pub plan: Option<entity::subscription_plan::Model>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl SubscriptionStatus {
    pub fn into_dto(self) -> SubscriptionStatusDto {
        SubscriptionStatusDto {
            plan: self.plan.map(SubscriptionPlanDto::from_entity),
            expires_at: self.expires_at,
        }
    }
}
