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
                    .table(WishlistItem::Table)
                    .if_not_exists()
                    .col(pk_auto(WishlistItem::Id))
                    .col(integer(WishlistItem::StudentId))
                    .col(integer(WishlistItem::CourseId))
                    .col(
                        timestamp(WishlistItem::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_item_student_id")
                            .from(WishlistItem::Table, WishlistItem::StudentId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_item_course_id")
                            .from(WishlistItem::Table, WishlistItem::CourseId)
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
            .drop_table(Table::drop().table(WishlistItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WishlistItem {
    Table,
    Id,
    StudentId,
    CourseId,
    CreatedAt,
}
