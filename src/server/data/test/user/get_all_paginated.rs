use super::*;

/// Tests paginating the user listing.
///
/// Verifies that the page size is honored and the total counts every user,
/// not just the returned page.
///
/// Expected: Ok with 2 users on the first page and total 3
#[tokio::test]
async fn paginates_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_student(db).await?;
    create_student(db).await?;
    create_student(db).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(0, 2, None).await?;

    assert_eq!(users.len(), 2);
    assert_eq!(total, 3);

    Ok(())
}

/// Tests filtering the listing by role.
///
/// Expected: Ok with only teacher accounts and a matching total
#[tokio::test]
async fn filters_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_student(db).await?;
    create_teacher(db).await?;
    create_teacher(db).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(0, 10, Some(Role::Teacher)).await?;

    assert_eq!(total, 2);
    assert!(users.iter().all(|u| u.role == Role::Teacher));

    Ok(())
}

/// Tests the alphabetical ordering of the listing.
///
/// Expected: Ok with users ordered by name
#[tokio::test]
async fn orders_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).name("Zoe").build().await?;
    UserFactory::new(db).name("Adam").build().await?;

    let repo = UserRepository::new(db);
    let (users, _) = repo.get_all_paginated(0, 10, None).await?;

    assert_eq!(users[0].name, "Adam");
    assert_eq!(users[1].name, "Zoe");

    Ok(())
}
