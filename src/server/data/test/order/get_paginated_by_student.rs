use super::*;

/// Tests the student order listing with its course join.
///
/// The page carries the joined course rows and the total counts every order
/// for the student.
///
/// Expected: Ok with 2 rows on the page, total 3, and course titles present
#[tokio::test]
async fn paginates_with_course_titles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = create_student(db).await?;
    let teacher = create_teacher(db).await?;

    let repo = OrderRepository::new(db);
    for _ in 0..3 {
        let course = CourseFactory::new(db, teacher.id).build().await?;
        repo.create(student.id, course.id, 1000, ORDER_STATUS_COMPLETED)
            .await?;
    }

    let (orders, total) = repo.get_paginated_by_student(student.id, 0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|(_, course)| course.is_some()));

    Ok(())
}

/// Tests that order listings are scoped to the student.
///
/// Expected: Ok with zero rows for the other student
#[tokio::test]
async fn orders_are_scoped_per_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let buyer = create_student(db).await?;
    let other = create_student(db).await?;
    let teacher = create_teacher(db).await?;
    let course = CourseFactory::new(db, teacher.id).build().await?;

    let repo = OrderRepository::new(db);
    repo.create(buyer.id, course.id, 1000, ORDER_STATUS_COMPLETED)
        .await?;

    let (orders, total) = repo.get_paginated_by_student(other.id, 0, 10).await?;

    assert_eq!(total, 0);
    assert!(orders.is_empty());

    Ok(())
}
