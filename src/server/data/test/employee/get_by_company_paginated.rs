use super::*;

/// Tests the roster listing with pagination.
///
/// One query pair returns the page and the full roster count, which is what
/// the roster page renders from.
///
/// Expected: Ok with 2 employees on the page and total 3
#[tokio::test]
async fn paginates_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = create_company(db).await?;
    for _ in 0..3 {
        create_employee(db, company.id).await?;
    }

    let repo = EmployeeRepository::new(db);
    let (employees, total) = repo.get_by_company_paginated(company.id, 0, 2).await?;

    assert_eq!(employees.len(), 2);
    assert_eq!(total, 3);

    Ok(())
}

/// Tests that rosters are scoped per company.
///
/// Expected: Ok with each company seeing only its own employees
#[tokio::test]
async fn rosters_are_scoped_per_company() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let acme = create_company(db).await?;
    let globex = create_company(db).await?;
    create_employee(db, acme.id).await?;
    create_employee(db, globex.id).await?;

    let repo = EmployeeRepository::new(db);
    let (employees, total) = repo.get_by_company_paginated(acme.id, 0, 10).await?;

    assert_eq!(total, 1);
    assert!(employees.iter().all(|e| e.company_id == acme.id));

    Ok(())
}
