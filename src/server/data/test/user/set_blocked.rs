use super::*;

/// Tests blocking a user.
///
/// Verifies that blocking sets the flag and that the change is reflected in
/// subsequent reads of the same account.
///
/// Expected: Ok(true) and is_blocked visible on the next find
#[tokio::test]
async fn blocking_is_reflected_in_subsequent_reads() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_student(db).await?;
    let repo = UserRepository::new(db);

    let updated = repo.set_blocked(user.id, true).await?;
    assert!(updated);

    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert!(reloaded.is_blocked);

    Ok(())
}

/// Tests unblocking a previously blocked user.
///
/// Expected: Ok(true) with the flag cleared on the next find
#[tokio::test]
async fn unblocking_clears_the_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).blocked(true).build().await?;
    let repo = UserRepository::new(db);

    repo.set_blocked(user.id, false).await?;

    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert!(!reloaded.is_blocked);

    Ok(())
}

/// Tests blocking a user that doesn't exist.
///
/// Expected: Ok(false) with no rows touched
#[tokio::test]
async fn blocking_missing_user_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo.set_blocked(9999, true).await?;

    assert!(!updated);

    Ok(())
}
