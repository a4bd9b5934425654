use super::*;

/// Tests the admin permission against an admin account.
///
/// Expected: Ok with the admin user
#[tokio::test]
async fn accepts_admin() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = create_admin(db).await.unwrap();
    AuthSession::new(session).set_user_id(admin.id).await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await
        .unwrap();

    assert_eq!(result.id, admin.id);
}

/// Tests the admin permission against a student account.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn rejects_non_admin() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = create_student(db).await.unwrap();
    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
}
