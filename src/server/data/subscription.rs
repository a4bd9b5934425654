use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::subscription::UpsertPlanParam;

pub struct SubscriptionPlanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionPlanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a plan
    pub async fn create(
        &self,
        param: UpsertPlanParam,
    ) -> Result<entity::subscription_plan::Model, DbErr> {
        entity::subscription_plan::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            price_cents: ActiveValue::Set(param.price_cents),
            duration_days: ActiveValue::Set(param.duration_days),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a plan by ID
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::subscription_plan::Model>, DbErr> {
        entity::prelude::SubscriptionPlan::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets all plans ordered by price
    pub async fn get_all(&self) -> Result<Vec<entity::subscription_plan::Model>, DbErr> {
        entity::prelude::SubscriptionPlan::find()
            .order_by_asc(entity::subscription_plan::Column::PriceCents)
            .all(self.db)
            .await
    }

    /// Replaces a plan's fields
    pub async fn update(
        &self,
        id: i32,
        param: UpsertPlanParam,
    ) -> Result<entity::subscription_plan::Model, DbErr> {
        let plan = entity::prelude::SubscriptionPlan::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Plan {} not found", id)))?;

        let mut active_model: entity::subscription_plan::ActiveModel = plan.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.description = ActiveValue::Set(param.description);
        active_model.price_cents = ActiveValue::Set(param.price_cents);
        active_model.duration_days = ActiveValue::Set(param.duration_days);

        active_model.update(self.db).await
    }

    /// Deletes a plan by ID
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::SubscriptionPlan::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
