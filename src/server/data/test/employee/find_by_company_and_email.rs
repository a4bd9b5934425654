use super::*;

/// Tests the per-company email lookup.
///
/// The same email may exist on two different companies' rosters; the lookup
/// only matches within the given company.
///
/// Expected: Ok(Some) for the owning company, Ok(None) for the other
#[tokio::test]
async fn matches_within_one_company() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let acme = create_company(db).await?;
    let globex = create_company(db).await?;
    EmployeeFactory::new(db, acme.id)
        .email("shared@example.com")
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);

    assert!(repo
        .find_by_company_and_email(acme.id, "shared@example.com")
        .await?
        .is_some());
    assert!(repo
        .find_by_company_and_email(globex.id, "shared@example.com")
        .await?
        .is_none());

    Ok(())
}
