use super::*;

/// Tests the admin existence check on an empty database.
///
/// Expected: Ok(false)
#[tokio::test]
async fn no_admin_on_fresh_database() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests the admin existence check once an admin account exists.
///
/// Non-admin accounts must not satisfy the check.
///
/// Expected: Ok(false) with only a student, Ok(true) after adding an admin
#[tokio::test]
async fn detects_admin_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_student(db).await?;
    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    create_admin(db).await?;
    assert!(repo.admin_exists().await?);

    Ok(())
}
