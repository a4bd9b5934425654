use super::*;
use entity::wallet_transaction::Kind;

/// Tests recording and listing wallet transactions.
///
/// Verifies that history comes back newest first with the full count.
///
/// Expected: Ok with both rows, newest first
#[tokio::test]
async fn records_and_lists_transactions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Wallet)
        .with_table(entity::prelude::WalletTransaction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_student(db).await?;
    let wallet = create_wallet(db, user.id, 0).await?;

    let repo = WalletRepository::new(db);
    repo.record_transaction(wallet.id, 1000, Kind::Credit, "Top-up".to_string())
        .await?;
    repo.record_transaction(wallet.id, 400, Kind::Debit, "Purchase".to_string())
        .await?;

    let (transactions, total) = repo.get_transactions_paginated(wallet.id, 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].note, "Purchase");
    assert_eq!(transactions[0].kind, Kind::Debit);
    assert_eq!(transactions[1].note, "Top-up");

    Ok(())
}

/// Tests that pagination slices the history.
///
/// Expected: Ok with one row per page and the total covering all rows
#[tokio::test]
async fn paginates_transactions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Wallet)
        .with_table(entity::prelude::WalletTransaction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_student(db).await?;
    let wallet = create_wallet(db, user.id, 0).await?;

    let repo = WalletRepository::new(db);
    for i in 0..3 {
        repo.record_transaction(wallet.id, 100 + i, Kind::Credit, format!("Credit {}", i))
            .await?;
    }

    let (transactions, total) = repo.get_transactions_paginated(wallet.id, 1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(transactions.len(), 1);

    Ok(())
}
