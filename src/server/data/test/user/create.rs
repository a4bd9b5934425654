use super::*;

/// Tests creating a new student account.
///
/// Verifies that the repository stores the provided fields, defaults the
/// blocked flag to false, and never returns the password hash on the domain
/// model.
///
/// Expected: Ok with an unblocked student
#[tokio::test]
async fn creates_new_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            "student@example.com".to_string(),
            "Student".to_string(),
            "salt$digest".to_string(),
            Role::Student,
        )
        .await
        .unwrap();

    assert_eq!(user.email, "student@example.com");
    assert_eq!(user.name, "Student");
    assert_eq!(user.role, Role::Student);
    assert!(!user.is_blocked);

    Ok(())
}

/// Tests that a duplicate email is rejected.
///
/// The unique index on email refuses a second account with the same address.
///
/// Expected: Err on the second create
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(
        "taken@example.com".to_string(),
        "First".to_string(),
        "salt$digest".to_string(),
        Role::Student,
    )
    .await?;

    let result = repo
        .create(
            "taken@example.com".to_string(),
            "Second".to_string(),
            "salt$digest".to_string(),
            Role::Teacher,
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
