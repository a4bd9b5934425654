use super::*;

/// Tests toggling a course into and out of the wishlist.
///
/// The first toggle adds, the second removes; at no point do two rows exist
/// for the same (student, course) pair.
///
/// Expected: Ok(true) then Ok(false) with the wishlist empty at the end
#[tokio::test]
async fn toggle_adds_then_removes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Course)
        .with_table(entity::prelude::WishlistItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = create_student(db).await?;
    let teacher = create_teacher(db).await?;
    let course = create_course(db, teacher.id).await?;

    let repo = WishlistRepository::new(db);

    assert!(repo.toggle(student.id, course.id).await?);
    assert_eq!(repo.count_for_student(student.id).await?, 1);

    assert!(!repo.toggle(student.id, course.id).await?);
    assert_eq!(repo.count_for_student(student.id).await?, 0);

    Ok(())
}

/// Tests the wishlist listing with its course join.
///
/// Expected: Ok with the joined course row present
#[tokio::test]
async fn lists_with_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Course)
        .with_table(entity::prelude::WishlistItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = create_student(db).await?;
    let teacher = create_teacher(db).await?;
    let course = create_course(db, teacher.id).await?;

    let repo = WishlistRepository::new(db);
    repo.toggle(student.id, course.id).await?;

    let entries = repo.get_for_student(student.id).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].1.as_ref().unwrap().id, course.id);

    Ok(())
}
