use super::*;

/// Tests a role permission against a matching account.
///
/// Expected: Ok with the teacher user
#[tokio::test]
async fn accepts_matching_role() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let teacher = create_teacher(db).await.unwrap();
    AuthSession::new(session).set_user_id(teacher.id).await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Teacher])
        .await
        .unwrap();

    assert_eq!(result.id, teacher.id);
}

/// Tests a role permission against a mismatched account.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn rejects_mismatched_role() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let student = create_student(db).await.unwrap();
    AuthSession::new(session).set_user_id(student.id).await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Teacher])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
}

/// Tests that admins satisfy role permissions.
///
/// Admins pass every role check without holding the role itself.
///
/// Expected: Ok with the admin user
#[tokio::test]
async fn admin_satisfies_role_permissions() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = create_admin(db).await.unwrap();
    AuthSession::new(session).set_user_id(admin.id).await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Company])
        .await
        .unwrap();

    assert_eq!(result.id, admin.id);
}
