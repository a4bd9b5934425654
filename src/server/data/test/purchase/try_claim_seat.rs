use super::*;

/// Tests claiming seats up to the purchased count.
///
/// The guarded increment succeeds while free seats remain and refuses the
/// claim once `seats_used` reaches `seats_purchased`; the counter never
/// exceeds the cap.
///
/// Expected: Ok(true) twice, then Ok(false) with seats_used == 2
#[tokio::test]
async fn claims_until_seats_exhausted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = create_company(db).await?;
    let teacher = create_teacher(db).await?;
    let course = create_course(db, teacher.id).await?;
    let purchase = CompanyPurchaseFactory::new(db, company.id, course.id)
        .seats_purchased(2)
        .build()
        .await?;

    let repo = PurchaseRepository::new(db);

    assert!(repo.try_claim_seat(purchase.id).await?);
    assert!(repo.try_claim_seat(purchase.id).await?);
    assert!(!repo.try_claim_seat(purchase.id).await?);

    let reloaded = repo.get_by_id(purchase.id).await?.unwrap();
    assert_eq!(reloaded.seats_used, 2);

    Ok(())
}

/// Tests claiming a seat on an unpaid purchase.
///
/// The paid check sits in the same WHERE clause as the seat check, so a
/// pending purchase never hands out seats.
///
/// Expected: Ok(false) with seats_used unchanged
#[tokio::test]
async fn refuses_claim_on_unpaid_purchase() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = create_company(db).await?;
    let teacher = create_teacher(db).await?;
    let course = create_course(db, teacher.id).await?;
    let purchase = CompanyPurchaseFactory::new(db, company.id, course.id)
        .checkout_status("pending")
        .build()
        .await?;

    let repo = PurchaseRepository::new(db);

    assert!(!repo.try_claim_seat(purchase.id).await?);

    let reloaded = repo.get_by_id(purchase.id).await?.unwrap();
    assert_eq!(reloaded.seats_used, 0);

    Ok(())
}

/// Tests claiming a seat on a missing purchase.
///
/// Expected: Ok(false)
#[tokio::test]
async fn refuses_claim_on_missing_purchase() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PurchaseRepository::new(db);
    assert!(!repo.try_claim_seat(9999).await?);

    Ok(())
}
