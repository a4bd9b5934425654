use super::*;

/// Tests writing an order row.
///
/// Expected: Ok with the amount and status stored
#[tokio::test]
async fn creates_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = create_student(db).await?;
    let teacher = create_teacher(db).await?;
    let course = CourseFactory::new(db, teacher.id).price_cents(4999).build().await?;

    let repo = OrderRepository::new(db);
    let order = repo
        .create(student.id, course.id, 4999, ORDER_STATUS_COMPLETED)
        .await?;

    assert_eq!(order.amount_cents, 4999);
    assert_eq!(order.status, ORDER_STATUS_COMPLETED);

    Ok(())
}

/// Tests the duplicate-purchase check.
///
/// Expected: false before the order, true after
#[tokio::test]
async fn detects_existing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = create_student(db).await?;
    let teacher = create_teacher(db).await?;
    let course = CourseFactory::new(db, teacher.id).build().await?;

    let repo = OrderRepository::new(db);

    assert!(!repo.exists_for_student_course(student.id, course.id).await?);
    repo.create(student.id, course.id, 1000, ORDER_STATUS_COMPLETED)
        .await?;
    assert!(repo.exists_for_student_course(student.id, course.id).await?);

    Ok(())
}

/// Tests collecting the owned course ids.
///
/// Expected: Ok with the ordered course's id
#[tokio::test]
async fn lists_owned_course_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = create_student(db).await?;
    let teacher = create_teacher(db).await?;
    let course = CourseFactory::new(db, teacher.id).build().await?;

    let repo = OrderRepository::new(db);
    repo.create(student.id, course.id, 1000, ORDER_STATUS_COMPLETED)
        .await?;

    let owned = repo.owned_course_ids(student.id).await?;
    assert_eq!(owned, vec![course.id]);

    Ok(())
}
