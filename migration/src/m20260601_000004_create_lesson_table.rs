use sea_orm_migration::{prelude::*, schema::*};

use super::m20260601_000003_create_course_module_table::CourseModule;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lesson::Table)
                    .if_not_exists()
                    .col(pk_auto(Lesson::Id))
                    .col(integer(Lesson::ModuleId))
                    .col(string(Lesson::Title))
                    .col(string(Lesson::VideoUrl))
                    .col(integer(Lesson::DurationSecs))
                    .col(integer(Lesson::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_module_id")
                            .from(Lesson::Table, Lesson::ModuleId)
                            .to(CourseModule::Table, CourseModule::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lesson::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lesson {
    Table,
    Id,
    ModuleId,
    Title,
    VideoUrl,
    DurationSecs,
    Position,
}
