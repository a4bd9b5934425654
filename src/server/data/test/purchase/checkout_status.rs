use super::*;

/// Tests copying a provider status onto a purchase.
///
/// Expected: Ok with the status string stored verbatim
#[tokio::test]
async fn copies_status_verbatim() -> Result<(), DbErr> {
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
    repo.set_checkout_status(purchase.id, "paid").await?;

    let reloaded = repo.get_by_id(purchase.id).await?.unwrap();
    assert_eq!(reloaded.checkout_status, "paid");

    Ok(())
}

/// Tests the pending sweep query.
///
/// Only pending purchases with a stored session id are polled; paid rows and
/// rows without a session stay out of the sweep.
///
/// Expected: Ok with exactly the pending-with-session purchase
#[tokio::test]
async fn pending_sweep_selects_only_reconcilable_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = create_company(db).await?;
    let teacher = create_teacher(db).await?;
    let course = create_course(db, teacher.id).await?;

    let reconcilable = CompanyPurchaseFactory::new(db, company.id, course.id)
        .checkout_status("pending")
        .checkout_session_id("cs_test_123")
        .build()
        .await?;
    // Pending but never reached the provider
    CompanyPurchaseFactory::new(db, company.id, course.id)
        .checkout_status("pending")
        .build()
        .await?;
    // Already settled
    CompanyPurchaseFactory::new(db, company.id, course.id)
        .checkout_session_id("cs_test_456")
        .build()
        .await?;

    let repo = PurchaseRepository::new(db);
    let pending = repo.get_pending_with_session().await?;

    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, reconcilable.id);

    Ok(())
}
