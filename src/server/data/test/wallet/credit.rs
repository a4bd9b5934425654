use super::*;

/// Tests crediting a wallet.
///
/// Verifies that the credit lands as a single balance increment.
///
/// Expected: Ok(true) with the balance raised by the amount
#[tokio::test]
async fn credits_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Wallet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_student(db).await?;
    create_wallet(db, user.id, 1000).await?;

    let repo = WalletRepository::new(db);
    let credited = repo.credit(user.id, 500).await?;

    assert!(credited);
    let wallet = repo.get_by_user(user.id).await?.unwrap();
    assert_eq!(wallet.balance_cents, 1500);

    Ok(())
}

/// Tests crediting a user without a wallet.
///
/// Expected: Ok(false) with no rows touched
#[tokio::test]
async fn credit_without_wallet_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Wallet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_student(db).await?;

    let repo = WalletRepository::new(db);
    let credited = repo.credit(user.id, 500).await?;

    assert!(!credited);

    Ok(())
}
