use super::*;

/// Tests emptying the cart.
///
/// Other owners' carts stay untouched.
///
/// Expected: Ok with the owner's cart empty and the other cart intact
#[tokio::test]
async fn clears_only_the_owners_cart() -> Result<(), DbErr> {
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
    let course_a = CourseFactory::new(db, teacher.id).build().await?;
    let course_b = CourseFactory::new(db, teacher.id).build().await?;

    let repo = CartRepository::new(db);
    for course_id in [course_a.id, course_b.id] {
        repo.upsert_line(
            AddCartItemParam {
                owner_id: alice.id,
                course_id,
                seats: 1,
            },
            1000,
        )
        .await?;
    }
    repo.upsert_line(
        AddCartItemParam {
            owner_id: bob.id,
            course_id: course_a.id,
            seats: 1,
        },
        1000,
    )
    .await?;

    repo.clear(alice.id).await?;

    assert!(repo.get_for_owner(alice.id).await?.is_empty());
    assert_eq!(repo.get_for_owner(bob.id).await?.len(), 1);

    Ok(())
}
