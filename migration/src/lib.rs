pub use sea_orm_migration::prelude::*;

mod m20260601_000001_create_user_table;
mod m20260601_000002_create_course_table;
mod m20260601_000003_create_course_module_table;
mod m20260601_000004_create_lesson_table;
mod m20260601_000005_create_wallet_table;
mod m20260601_000006_create_wallet_transaction_table;
mod m20260601_000007_create_cart_item_table;
mod m20260601_000008_create_wishlist_item_table;
mod m20260601_000009_create_course_order_table;
mod m20260601_000010_create_comment_table;
mod m20260601_000011_create_comment_reaction_table;
mod m20260601_000012_create_employee_table;
mod m20260601_000013_create_company_purchase_table;
mod m20260601_000014_create_course_assignment_table;
mod m20260601_000015_create_subscription_plan_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_create_user_table::Migration),
            Box::new(m20260601_000002_create_course_table::Migration),
            Box::new(m20260601_000003_create_course_module_table::Migration),
            Box::new(m20260601_000004_create_lesson_table::Migration),
            Box::new(m20260601_000005_create_wallet_table::Migration),
            Box::new(m20260601_000006_create_wallet_transaction_table::Migration),
            Box::new(m20260601_000007_create_cart_item_table::Migration),
            Box::new(m20260601_000008_create_wishlist_item_table::Migration),
            Box::new(m20260601_000009_create_course_order_table::Migration),
            Box::new(m20260601_000010_create_comment_table::Migration),
            Box::new(m20260601_000011_create_comment_reaction_table::Migration),
            Box::new(m20260601_000012_create_employee_table::Migration),
            Box::new(m20260601_000013_create_company_purchase_table::Migration),
            Box::new(m20260601_000014_create_course_assignment_table::Migration),
            Box::new(m20260601_000015_create_subscription_plan_table::Migration),
        ]
    }
}
