use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use entity::wallet_transaction::Kind;

use crate::server::{
    data::{
        subscription::SubscriptionPlanRepository, user::UserRepository, wallet::WalletRepository,
    },
    error::{wallet::WalletError, AppError},
    model::{
        subscription::{SubscriptionStatus, UpsertPlanParam},
        user::User,
    },
};

pub struct SubscriptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all plans, cheapest first
    pub async fn get_plans(&self) -> Result<Vec<entity::subscription_plan::Model>, AppError> {
        Ok(SubscriptionPlanRepository::new(self.db).get_all().await?)
    }

    /// Creates a plan
    pub async fn create_plan(
        &self,
        param: UpsertPlanParam,
    ) -> Result<entity::subscription_plan::Model, AppError> {
        if param.price_cents <= 0 || param.duration_days <= 0 {
            return Err(AppError::BadRequest(
                "Plan price and duration must be positive".to_string(),
            ));
        }

        Ok(SubscriptionPlanRepository::new(self.db).create(param).await?)
    }

    /// Replaces a plan's fields
    /// Returns None if the plan doesn't exist
    pub async fn update_plan(
        &self,
        plan_id: i32,
        param: UpsertPlanParam,
    ) -> Result<Option<entity::subscription_plan::Model>, AppError> {
        let repo = SubscriptionPlanRepository::new(self.db);

        if repo.get_by_id(plan_id).await?.is_none() {
            return Ok(None);
        }

        let plan = repo.update(plan_id, param).await?;
        Ok(Some(plan))
    }

    /// Deletes a plan.
    ///
    /// Refused while any student is subscribed to it.
    ///
    /// # Returns
    /// - `Ok(true)` - Plan deleted
    /// - `Ok(false)` - No such plan
    /// - `Err(AppError::BadRequest)` - Plan still has subscribers
    pub async fn delete_plan(&self, plan_id: i32) -> Result<bool, AppError> {
        let repo = SubscriptionPlanRepository::new(self.db);

        if repo.get_by_id(plan_id).await?.is_none() {
            return Ok(false);
        }

        let subscribers = UserRepository::new(self.db).count_subscribers(plan_id).await?;
        if subscribers > 0 {
            return Err(AppError::BadRequest(
                "Plan still has active subscribers".to_string(),
            ));
        }

        repo.delete(plan_id).await?;
        Ok(true)
    }

    /// Subscribes a student to a plan, paying from wallet funds.
    ///
    /// Re-subscribing to the currently active plan is rejected; switching to
    /// a different plan debits the new price and overwrites the expiry.
    ///
    /// # Returns
    /// - `Ok(SubscriptionStatus)` - The active plan and its expiry
    /// - `Err(AppError::NotFound)` - Unknown plan
    /// - `Err(AppError::BadRequest)` - Plan already active
    /// - `Err(AppError::WalletErr(_))` - Missing wallet or insufficient funds
    pub async fn subscribe(&self, user: &User, plan_id: i32) -> Result<SubscriptionStatus, AppError> {
        let plan_repo = SubscriptionPlanRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);
        let wallet_repo = WalletRepository::new(self.db);

        let Some(plan) = plan_repo.get_by_id(plan_id).await? else {
            return Err(AppError::NotFound("Plan not found".to_string()));
        };

        let now = Utc::now();
        let currently_active =
            user.plan_id == Some(plan.id) && user.plan_expires_at.is_some_and(|at| at > now);
        if currently_active {
            return Err(AppError::BadRequest(
                "This plan is already active".to_string(),
            ));
        }

        let Some(wallet) = wallet_repo.get_by_user(user.id).await? else {
            return Err(WalletError::NotFound(user.id).into());
        };

        if !wallet_repo.debit(user.id, plan.price_cents).await? {
            return Err(WalletError::InsufficientFunds {
                requested_cents: plan.price_cents,
            }
            .into());
        }
        wallet_repo
            .record_transaction(
                wallet.id,
                plan.price_cents,
                Kind::Debit,
                format!("Subscription to plan '{}'", plan.name),
            )
            .await?;

        let expires_at = now + Duration::days(plan.duration_days as i64);
        user_repo
            .set_plan(user.id, Some(plan.id), Some(expires_at))
            .await?;

        Ok(SubscriptionStatus {
            plan: Some(plan),
            expires_at: Some(expires_at),
        })
    }

    /// Gets a user's current subscription
    pub async fn get_status(&self, user: &User) -> Result<SubscriptionStatus, AppError> {
        let plan = match user.plan_id {
            Some(plan_id) => {
                SubscriptionPlanRepository::new(self.db)
                    .get_by_id(plan_id)
                    .await?
            }
            None => None,
        };

        Ok(SubscriptionStatus {
            plan,
            expires_at: user.plan_expires_at,
        })
    }
}
