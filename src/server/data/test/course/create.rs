use super::*;

/// Tests creating a course.
///
/// New courses always start unpublished regardless of the caller's wishes;
/// publishing is a separate step.
///
/// Expected: Ok with an unpublished course carrying the given fields
#[tokio::test]
async fn creates_unpublished_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = create_teacher(db).await?;

    let repo = CourseRepository::new(db);
    let course = repo
        .create(CreateCourseParam {
            teacher_id: teacher.id,
            title: "Intro to Rust".to_string(),
            description: "Ownership without tears.".to_string(),
            category: "programming".to_string(),
            price_cents: 4999,
        })
        .await?;

    assert_eq!(course.title, "Intro to Rust");
    assert_eq!(course.teacher_id, teacher.id);
    assert!(!course.is_published);

    Ok(())
}
