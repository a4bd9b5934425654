use super::*;

/// Tests adding a course to an empty cart.
///
/// Expected: Ok with one line holding the captured price
#[tokio::test]
async fn inserts_new_line() -> Result<(), DbErr> {
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
    let course = CourseFactory::new(db, teacher.id).price_cents(2500).build().await?;

    let repo = CartRepository::new(db);
    let line = repo
        .upsert_line(
            AddCartItemParam {
                owner_id: student.id,
                course_id: course.id,
                seats: 1,
            },
            course.price_cents,
        )
        .await?;

    assert_eq!(line.seats, 1);
    assert_eq!(line.unit_price_cents, 2500);

    Ok(())
}

/// Tests re-adding a course that is already in the cart.
///
/// The existing line is updated with the new seat count and price; no second
/// line appears for the same course.
///
/// Expected: Ok with one line carrying the refreshed values
#[tokio::test]
async fn readding_updates_instead_of_duplicating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Course)
        .with_table(entity::prelude::CartItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = create_student(db).await?;
    let teacher = create_teacher(db).await?;
    let course = CourseFactory::new(db, teacher.id).price_cents(2500).build().await?;

    let repo = CartRepository::new(db);
    repo.upsert_line(
        AddCartItemParam {
            owner_id: company.id,
            course_id: course.id,
            seats: 2,
        },
        2500,
    )
    .await?;

    // Price changed between the two adds
    let line = repo
        .upsert_line(
            AddCartItemParam {
                owner_id: company.id,
                course_id: course.id,
                seats: 5,
            },
            3000,
        )
        .await?;

    assert_eq!(line.seats, 5);
    assert_eq!(line.unit_price_cents, 3000);

    let lines = repo.get_for_owner(company.id).await?;
    assert_eq!(lines.len(), 1);

    Ok(())
}

/// Tests that carts are scoped per owner.
///
/// Expected: Ok with each owner seeing only their own line
#[tokio::test]
async fn carts_are_scoped_per_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Course)
        .with_table(entity::prelude::CartItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = create_student(db).await?;
    let bob = create_student(db).await?;
    let teacher = create_teacher(db).await?;
    let course = CourseFactory::new(db, teacher.id).build().await?;

    let repo = CartRepository::new(db);
    repo.upsert_line(
        AddCartItemParam {
            owner_id: alice.id,
            course_id: course.id,
            seats: 1,
        },
        course.price_cents,
    )
    .await?;

    assert_eq!(repo.get_for_owner(alice.id).await?.len(), 1);
    assert!(repo.get_for_owner(bob.id).await?.is_empty());

    Ok(())
}
