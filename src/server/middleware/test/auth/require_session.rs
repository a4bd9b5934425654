use super::*;

/// Tests the guard with no user in the session.
///
/// Expected: Err(UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}

/// Tests the guard when the session references a deleted user.
///
/// Expected: Err(UserNotInDatabase)
#[tokio::test]
async fn rejects_stale_session_user() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(424242).await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(424242)))
    ));
}

/// Tests the guard with a valid session user and no required permissions.
///
/// Expected: Ok with the session user
#[tokio::test]
async fn accepts_any_logged_in_user() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = create_student(db).await.unwrap();
    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await.unwrap();

    assert_eq!(result.id, user.id);
}

/// Tests the guard against a blocked account.
///
/// Blocking is checked before permissions, so even a permissionless require
/// rejects a blocked user.
///
/// Expected: Err(AccountBlocked)
#[tokio::test]
async fn rejects_blocked_account() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = UserFactory::new(db).blocked(true).build().await.unwrap();
    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountBlocked(_)))
    ));
}
