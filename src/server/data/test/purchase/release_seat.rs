use super::*;

/// Tests releasing a claimed seat.
///
/// Expected: Ok(true) with seats_used back at zero
#[tokio::test]
async fn releases_claimed_seat() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = create_company(db).await?;
    let teacher = create_teacher(db).await?;
    let course = create_course(db, teacher.id).await?;
    let purchase = CompanyPurchaseFactory::new(db, company.id, course.id)
        .seats_used(1)
        .build()
        .await?;

    let repo = PurchaseRepository::new(db);

    assert!(repo.release_seat(purchase.id).await?);

    let reloaded = repo.get_by_id(purchase.id).await?.unwrap();
    assert_eq!(reloaded.seats_used, 0);

    Ok(())
}

/// Tests releasing a seat when none are in use.
///
/// The guard floors the counter at zero; it never goes negative.
///
/// Expected: Ok(false) with seats_used still zero
#[tokio::test]
async fn release_floors_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = create_company(db).await?;
    let teacher = create_teacher(db).await?;
    let course = create_course(db, teacher.id).await?;
    let purchase = CompanyPurchaseFactory::new(db, company.id, course.id)
        .build()
        .await?;

    let repo = PurchaseRepository::new(db);

    assert!(!repo.release_seat(purchase.id).await?);

    let reloaded = repo.get_by_id(purchase.id).await?.unwrap();
    assert_eq!(reloaded.seats_used, 0);

    Ok(())
}
