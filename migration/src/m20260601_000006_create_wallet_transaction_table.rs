use sea_orm_migration::{prelude::*, schema::*};

use super::m20260601_000005_create_wallet_table::Wallet;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WalletTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(WalletTransaction::Id))
                    .col(integer(WalletTransaction::WalletId))
                    .col(big_integer(WalletTransaction::AmountCents))
                    .col(string(WalletTransaction::Kind))
                    .col(string(WalletTransaction::Note))
                    .col(
                        timestamp(WalletTransaction::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wallet_transaction_wallet_id")
                            .from(WalletTransaction::Table, WalletTransaction::WalletId)
                            .to(Wallet::Table, Wallet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WalletTransaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WalletTransaction {
    Table,
    Id,
    WalletId,
    AmountCents,
    Kind,
    Note,
    CreatedAt,
}
