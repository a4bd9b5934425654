use super::*;

/// Tests removing a course from the cart.
///
/// Expected: Ok(true) with the line gone
#[tokio::test]
async fn removes_line() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Course)
        .with_table(entity::prelude::CartItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = create_student(db).await?;
    let teacher = create_teacher(db).await?;
    let course = CourseFactory::new(db, teacher.id).build().await?;

    let repo = CartRepository::new(db);
    repo.upsert_line(
        AddCartItemParam {
            owner_id: student.id,
            course_id: course.id,
            seats: 1,
        },
        course.price_cents,
    )
    .await?;

    assert!(repo.remove(student.id, course.id).await?);
    assert!(repo.get_for_owner(student.id).await?.is_empty());

    Ok(())
}

/// Tests removing a course that isn't in the cart.
///
/// Expected: Ok(false)
#[tokio::test]
async fn removing_absent_course_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Course)
        .with_table(entity::prelude::CartItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = create_student(db).await?;

    let repo = CartRepository::new(db);
    assert!(!repo.remove(student.id, 42).await?);

    Ok(())
}
