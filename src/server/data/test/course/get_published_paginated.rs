use super::*;

/// Tests that the catalog query excludes unpublished courses.
///
/// Expected: Ok with only the published course and total 1
#[tokio::test]
async fn catalog_hides_unpublished_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = create_teacher(db).await?;
    let published = CourseFactory::new(db, teacher.id).build().await?;
    CourseFactory::new(db, teacher.id).published(false).build().await?;

    let repo = CourseRepository::new(db);
    let (courses, total) = repo.get_published_paginated(0, 10, None).await?;

    assert_eq!(total, 1);
    assert_eq!(courses[0].id, published.id);

    Ok(())
}

/// Tests the category filter on the catalog query.
///
/// Expected: Ok with only courses in the requested category
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = create_teacher(db).await?;
    CourseFactory::new(db, teacher.id).category("design").build().await?;
    CourseFactory::new(db, teacher.id).category("programming").build().await?;

    let repo = CourseRepository::new(db);
    let (courses, total) = repo.get_published_paginated(0, 10, Some("design")).await?;

    assert_eq!(total, 1);
    assert_eq!(courses[0].category, "design");

    Ok(())
}

/// Tests the teacher-scoped listing.
///
/// Teachers see their own unpublished drafts, but never other teachers'
/// courses.
///
/// Expected: Ok with both of the teacher's courses and nobody else's
#[tokio::test]
async fn teacher_listing_includes_drafts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = create_teacher(db).await?;
    let other = create_teacher(db).await?;
    CourseFactory::new(db, teacher.id).build().await?;
    CourseFactory::new(db, teacher.id).published(false).build().await?;
    CourseFactory::new(db, other.id).build().await?;

    let repo = CourseRepository::new(db);
    let (courses, total) = repo.get_by_teacher_paginated(teacher.id, 0, 10).await?;

    assert_eq!(total, 2);
    assert!(courses.iter().all(|c| c.teacher_id == teacher.id));

    Ok(())
}
