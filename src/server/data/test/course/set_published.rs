use super::*;

/// Tests publishing a course.
///
/// Expected: Ok(true) with the course visible in the catalog afterwards
#[tokio::test]
async fn publish_makes_course_visible() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = create_teacher(db).await?;
    let course = CourseFactory::new(db, teacher.id).published(false).build().await?;

    let repo = CourseRepository::new(db);
    assert!(repo.set_published(course.id, true).await?);

    let (courses, _) = repo.get_published_paginated(0, 10, None).await?;
    assert_eq!(courses.len(), 1);

    Ok(())
}

/// Tests publishing a course that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn publishing_missing_course_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    assert!(!repo.set_published(12345, true).await?);

    Ok(())
}
