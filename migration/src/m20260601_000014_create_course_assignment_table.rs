use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260601_000012_create_employee_table::Employee,
    m20260601_000013_create_company_purchase_table::CompanyPurchase,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseAssignment::Table)
                    .if_not_exists()
                    .col(pk_auto(CourseAssignment::Id))
                    .col(integer(CourseAssignment::PurchaseId))
                    .col(integer(CourseAssignment::EmployeeId))
                    .col(
                        timestamp(CourseAssignment::AssignedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_assignment_purchase_id")
                            .from(CourseAssignment::Table, CourseAssignment::PurchaseId)
                            .to(CompanyPurchase::Table, CompanyPurchase::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_assignment_employee_id")
                            .from(CourseAssignment::Table, CourseAssignment::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CourseAssignment {
    Table,
    Id,
    PurchaseId,
    EmployeeId,
    AssignedAt,
}
