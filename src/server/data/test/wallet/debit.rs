use super::*;

/// Tests a debit within the available balance.
///
/// Expected: Ok(true) with the balance lowered by the amount
#[tokio::test]
async fn debits_balance() -> Result<(), DbErr> {
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
    let debited = repo.debit(user.id, 400).await?;

    assert!(debited);
    let wallet = repo.get_by_user(user.id).await?.unwrap();
    assert_eq!(wallet.balance_cents, 600);

    Ok(())
}

/// Tests a debit larger than the available balance.
///
/// The guarded update matches no row, so the debit is refused and the
/// balance is untouched. The balance can never go negative.
///
/// Expected: Ok(false) with the balance unchanged
#[tokio::test]
async fn refuses_debit_beyond_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Wallet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_student(db).await?;
    create_wallet(db, user.id, 300).await?;

    let repo = WalletRepository::new(db);
    let debited = repo.debit(user.id, 301).await?;

    assert!(!debited);
    let wallet = repo.get_by_user(user.id).await?.unwrap();
    assert_eq!(wallet.balance_cents, 300);

    Ok(())
}

/// Tests debiting the exact balance.
///
/// Expected: Ok(true) with the balance at zero
#[tokio::test]
async fn debits_down_to_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Wallet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_student(db).await?;
    create_wallet(db, user.id, 250).await?;

    let repo = WalletRepository::new(db);
    let debited = repo.debit(user.id, 250).await?;

    assert!(debited);
    let wallet = repo.get_by_user(user.id).await?.unwrap();
    assert_eq!(wallet.balance_cents, 0);

    Ok(())
}

/// Tests debiting a user without a wallet.
///
/// Expected: Ok(false)
#[tokio::test]
async fn debit_without_wallet_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Wallet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_student(db).await?;

    let repo = WalletRepository::new(db);
    assert!(!repo.debit(user.id, 100).await?);

    Ok(())
}
