use super::*;

/// Tests writing and reading seat assignments.
///
/// Expected: Ok with the assignment visible and joined to the employee
#[tokio::test]
async fn creates_and_lists_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = create_company(db).await?;
    let teacher = create_teacher(db).await?;
    let course = create_course(db, teacher.id).await?;
    let purchase = CompanyPurchaseFactory::new(db, company.id, course.id)
        .build()
        .await?;
    let employee = create_employee(db, company.id).await?;

    let repo = PurchaseRepository::new(db);

    assert!(!repo.assignment_exists(purchase.id, employee.id).await?);
    repo.create_assignment(purchase.id, employee.id).await?;
    assert!(repo.assignment_exists(purchase.id, employee.id).await?);

    let assignments = repo.get_assignments(purchase.id).await?;
    assert_eq!(assignments.len(), 1);
    let (assignment, joined_employee) = &assignments[0];
    assert_eq!(assignment.employee_id, employee.id);
    assert_eq!(joined_employee.as_ref().unwrap().name, employee.name);

    Ok(())
}

/// Tests deleting an assignment.
///
/// Expected: Ok(true) then Ok(false) when it is already gone
#[tokio::test]
async fn deletes_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = create_company(db).await?;
    let teacher = create_teacher(db).await?;
    let course = create_course(db, teacher.id).await?;
    let purchase = CompanyPurchaseFactory::new(db, company.id, course.id)
        .build()
        .await?;
    let employee = create_employee(db, company.id).await?;

    let repo = PurchaseRepository::new(db);
    repo.create_assignment(purchase.id, employee.id).await?;

    assert!(repo.delete_assignment(purchase.id, employee.id).await?);
    assert!(!repo.delete_assignment(purchase.id, employee.id).await?);

    Ok(())
}

/// Tests listing an employee's assignments across purchases.
///
/// Expected: Ok with both assignment rows for the employee
#[tokio::test]
async fn lists_assignments_for_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = create_company(db).await?;
    let teacher = create_teacher(db).await?;
    let course_a = create_course(db, teacher.id).await?;
    let course_b = create_course(db, teacher.id).await?;
    let purchase_a = CompanyPurchaseFactory::new(db, company.id, course_a.id)
        .build()
        .await?;
    let purchase_b = CompanyPurchaseFactory::new(db, company.id, course_b.id)
        .build()
        .await?;
    let employee = create_employee(db, company.id).await?;

    let repo = PurchaseRepository::new(db);
    repo.create_assignment(purchase_a.id, employee.id).await?;
    repo.create_assignment(purchase_b.id, employee.id).await?;

    let assignments = repo.get_assignments_for_employee(employee.id).await?;
    assert_eq!(assignments.len(), 2);

    Ok(())
}
