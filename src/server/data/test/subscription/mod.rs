use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::subscription_plan::create_plan;

use crate::server::data::subscription::SubscriptionPlanRepository;
use crate::server::model::subscription::UpsertPlanParam;

mod crud;
