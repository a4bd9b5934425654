use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260601_000001_create_user_table::User, m20260601_000002_create_course_table::Course,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyPurchase::Table)
                    .if_not_exists()
                    .col(pk_auto(CompanyPurchase::Id))
                    .col(integer(CompanyPurchase::CompanyId))
                    .col(integer(CompanyPurchase::CourseId))
                    .col(integer(CompanyPurchase::SeatsPurchased))
                    .col(integer(CompanyPurchase::SeatsUsed).default(0))
                    .col(string_null(CompanyPurchase::CheckoutSessionId))
                    .col(string(CompanyPurchase::CheckoutStatus))
                    .col(
                        timestamp(CompanyPurchase::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_purchase_company_id")
                            .from(CompanyPurchase::Table, CompanyPurchase::CompanyId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_purchase_course_id")
                            .from(CompanyPurchase::Table, CompanyPurchase::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompanyPurchase::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CompanyPurchase {
    Table,
    Id,
    CompanyId,
    CourseId,
    SeatsPurchased,
    SeatsUsed,
    CheckoutSessionId,
    CheckoutStatus,
    CreatedAt,
}
