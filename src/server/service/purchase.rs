//! Company purchase service: hosted checkout and seat assignment.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        course::CourseRepository,
        employee::EmployeeRepository,
        purchase::{PurchaseRepository, CHECKOUT_STATUS_PAID},
    },
    error::{purchase::PurchaseError, AppError},
    model::purchase::{
        Assignment, PaginatedPurchases, Purchase, StartPurchaseParam, StartedPurchase,
    },
    service::checkout::{CheckoutClient, CreateSessionParams},
};

pub struct CompanyPurchaseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyPurchaseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts a seat-license purchase through hosted checkout.
    ///
    /// Creates a pending purchase, opens a provider session for it, and
    /// stores the session id for later reconciliation. The caller redirects
    /// the company user to the returned URL; payment state is the provider's
    /// until the sweep or an explicit confirm copies it back.
    ///
    /// # Returns
    /// - `Ok(StartedPurchase)` - The pending purchase and the redirect URL
    /// - `Err(AppError::BadRequest)` - Unknown/unpublished course or seats < 1
    pub async fn start(
        &self,
        param: StartPurchaseParam,
        checkout: &CheckoutClient,
        app_url: &str,
    ) -> Result<StartedPurchase, AppError> {
        if param.seats < 1 {
            return Err(AppError::BadRequest(
                "Seat count must be at least 1".to_string(),
            ));
        }

        let course = CourseRepository::new(self.db)
            .get_by_id(param.course_id)
            .await?;
        let Some(course) = course.filter(|c| c.is_published) else {
            return Err(AppError::BadRequest(
                "Course is not available for purchase".to_string(),
            ));
        };

        let repo = PurchaseRepository::new(self.db);
        let purchase = repo
            .create(param.company_id, param.course_id, param.seats)
            .await?;

        let session = checkout
            .create_session(CreateSessionParams {
                purchase_id: purchase.id,
                product_name: course.title.clone(),
                unit_amount_cents: course.price_cents,
                quantity: param.seats,
                success_url: format!("{}/company/purchases?checkout=success", app_url),
                cancel_url: format!("{}/company/purchases?checkout=canceled", app_url),
            })
            .await?;

        repo.set_checkout_session(purchase.id, &session.id).await?;

        let checkout_url = session.url.unwrap_or_default();
        let purchase = repo
            .get_by_id(purchase.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Purchase not found after creation".to_string()))?;

        Ok(StartedPurchase {
            purchase: Purchase {
                purchase,
                course_title: course.title,
            },
            checkout_url,
        })
    }

    /// Re-reads the provider session and copies its payment status.
    /// Returns None if the purchase doesn't exist or belongs to another company
    pub async fn confirm(
        &self,
        purchase_id: i32,
        company_id: i32,
        checkout: &CheckoutClient,
    ) -> Result<Option<Purchase>, AppError> {
        let repo = PurchaseRepository::new(self.db);

        let Some(purchase) = repo.get_by_id(purchase_id).await? else {
            return Ok(None);
        };
        if purchase.company_id != company_id {
            return Ok(None);
        }

        let Some(session_id) = purchase.checkout_session_id.as_deref() else {
            return Err(AppError::BadRequest(
                "Purchase has no checkout session".to_string(),
            ));
        };

        let session = checkout.get_session(session_id).await?;
        repo.set_checkout_status(purchase_id, &session.payment_status)
            .await?;

        let purchase = repo
            .get_by_id(purchase_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Purchase not found".to_string()))?;

        self.with_course_title(purchase).await.map(Some)
    }

    /// Gets the company's purchases, newest first
    pub async fn get_paginated(
        &self,
        company_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedPurchases, AppError> {
        let repo = PurchaseRepository::new(self.db);

        let (rows, total) = repo
            .get_by_company_paginated(company_id, page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedPurchases {
            purchases: rows
                .into_iter()
                .map(|(purchase, course)| Purchase {
                    purchase,
                    course_title: course.map(|c| c.title).unwrap_or_default(),
                })
                .collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Assigns a purchased seat to an employee.
    ///
    /// The seat counter is claimed with a single guarded increment; when the
    /// increment matches no row the failure is classified afterwards as
    /// either an unpaid purchase or seat exhaustion.
    ///
    /// # Returns
    /// - `Ok(Some(Assignment))` - Seat claimed and assignment written
    /// - `Ok(None)` - Purchase or employee missing / owned by another company
    /// - `Err(AppError::PurchaseErr(_))` - Duplicate assignment, unpaid, or no free seat
    /// - `Err(AppError::BadRequest)` - Deactivated employee
    pub async fn assign(
        &self,
        company_id: i32,
        purchase_id: i32,
        employee_id: i32,
    ) -> Result<Option<Assignment>, AppError> {
        let repo = PurchaseRepository::new(self.db);
        let employee_repo = EmployeeRepository::new(self.db);

        let Some(purchase) = repo.get_by_id(purchase_id).await? else {
            return Ok(None);
        };
        if purchase.company_id != company_id {
            return Ok(None);
        }

        let Some(employee) = employee_repo.get_by_id(employee_id).await? else {
            return Ok(None);
        };
        if employee.company_id != company_id {
            return Ok(None);
        }
        if !employee.is_active {
            return Err(AppError::BadRequest(
                "Employee is deactivated".to_string(),
            ));
        }

        if repo.assignment_exists(purchase_id, employee_id).await? {
            return Err(PurchaseError::AlreadyAssigned {
                purchase_id,
                employee_id,
            }
            .into());
        }

        if !repo.try_claim_seat(purchase_id).await? {
            if purchase.checkout_status != CHECKOUT_STATUS_PAID {
                return Err(PurchaseError::NotPaid(purchase.checkout_status).into());
            }
            return Err(PurchaseError::SeatLimitReached(purchase_id).into());
        }

        let assignment = repo.create_assignment(purchase_id, employee_id).await?;

        Ok(Some(Assignment {
            assignment,
            employee_name: employee.name,
        }))
    }

    /// Releases an employee's seat back to the purchase.
    ///
    /// # Returns
    /// - `Ok(true)` - Assignment removed and counter decremented
    /// - `Ok(false)` - Purchase or assignment missing / owned by another company
    pub async fn release(
        &self,
        company_id: i32,
        purchase_id: i32,
        employee_id: i32,
    ) -> Result<bool, AppError> {
        let repo = PurchaseRepository::new(self.db);

        let Some(purchase) = repo.get_by_id(purchase_id).await? else {
            return Ok(false);
        };
        if purchase.company_id != company_id {
            return Ok(false);
        }

        if !repo.delete_assignment(purchase_id, employee_id).await? {
            return Ok(false);
        }

        if !repo.release_seat(purchase_id).await? {
            // Counter already at zero despite a deleted assignment row.
            tracing::warn!(
                "Seat counter for purchase {} was zero while releasing employee {}",
                purchase_id,
                employee_id
            );
        }

        Ok(true)
    }

    /// Gets the assignments on one of the company's purchases.
    /// Returns None if the purchase doesn't exist or belongs to another company
    pub async fn get_assignments(
        &self,
        purchase_id: i32,
        company_id: i32,
    ) -> Result<Option<Vec<Assignment>>, AppError> {
        let repo = PurchaseRepository::new(self.db);

        let Some(purchase) = repo.get_by_id(purchase_id).await? else {
            return Ok(None);
        };
        if purchase.company_id != company_id {
            return Ok(None);
        }

        let assignments = repo
            .get_assignments(purchase_id)
            .await?
            .into_iter()
            .map(|(assignment, employee)| Assignment {
                assignment,
                employee_name: employee.map(|e| e.name).unwrap_or_default(),
            })
            .collect();

        Ok(Some(assignments))
    }

    async fn with_course_title(
        &self,
        purchase: entity::company_purchase::Model,
    ) -> Result<Purchase, AppError> {
        let course = CourseRepository::new(self.db)
            .get_by_id(purchase.course_id)
            .await?;

        Ok(Purchase {
            course_title: course.map(|c| c.title).unwrap_or_default(),
            purchase,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;
    use test_utils::factory::company_purchase::CompanyPurchaseFactory;
    use test_utils::factory::course::create_course;
    use test_utils::factory::employee::{create_employee, EmployeeFactory};
    use test_utils::factory::user::{create_company, create_teacher};

    /// Tests assigning seats until the purchase is exhausted.
    ///
    /// Expected: two Ok assignments, then Err(SeatLimitReached)
    #[tokio::test]
    async fn assigns_until_seats_run_out() {
        let test = TestBuilder::new().with_company_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let company = create_company(db).await.unwrap();
        let teacher = create_teacher(db).await.unwrap();
        let course = create_course(db, teacher.id).await.unwrap();
        let purchase = CompanyPurchaseFactory::new(db, company.id, course.id)
            .seats_purchased(2)
            .build()
            .await
            .unwrap();

        let service = CompanyPurchaseService::new(db);

        for _ in 0..2 {
            let employee = create_employee(db, company.id).await.unwrap();
            let assignment = service
                .assign(company.id, purchase.id, employee.id)
                .await
                .unwrap();
            assert!(assignment.is_some());
        }

        let extra = create_employee(db, company.id).await.unwrap();
        let result = service.assign(company.id, purchase.id, extra.id).await;

        assert!(matches!(
            result,
            Err(AppError::PurchaseErr(PurchaseError::SeatLimitReached(_)))
        ));
    }

    /// Tests assigning a seat on an unpaid purchase.
    ///
    /// Expected: Err(NotPaid) carrying the copied status
    #[tokio::test]
    async fn refuses_assignment_on_unpaid_purchase() {
        let test = TestBuilder::new().with_company_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let company = create_company(db).await.unwrap();
        let teacher = create_teacher(db).await.unwrap();
        let course = create_course(db, teacher.id).await.unwrap();
        let purchase = CompanyPurchaseFactory::new(db, company.id, course.id)
            .checkout_status("pending")
            .build()
            .await
            .unwrap();
        let employee = create_employee(db, company.id).await.unwrap();

        let result = CompanyPurchaseService::new(db)
            .assign(company.id, purchase.id, employee.id)
            .await;

        assert!(matches!(
            result,
            Err(AppError::PurchaseErr(PurchaseError::NotPaid(_)))
        ));
    }

    /// Tests assigning the same employee twice.
    ///
    /// Expected: Err(AlreadyAssigned) with seats_used still 1
    #[tokio::test]
    async fn refuses_duplicate_assignment() {
        let test = TestBuilder::new().with_company_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let company = create_company(db).await.unwrap();
        let teacher = create_teacher(db).await.unwrap();
        let course = create_course(db, teacher.id).await.unwrap();
        let purchase = CompanyPurchaseFactory::new(db, company.id, course.id)
            .build()
            .await
            .unwrap();
        let employee = create_employee(db, company.id).await.unwrap();

        let service = CompanyPurchaseService::new(db);
        service
            .assign(company.id, purchase.id, employee.id)
            .await
            .unwrap();

        let result = service.assign(company.id, purchase.id, employee.id).await;

        assert!(matches!(
            result,
            Err(AppError::PurchaseErr(PurchaseError::AlreadyAssigned { .. }))
        ));

        let reloaded = PurchaseRepository::new(db)
            .get_by_id(purchase.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.seats_used, 1);
    }

    /// Tests assigning a deactivated employee.
    ///
    /// Expected: Err(BadRequest)
    #[tokio::test]
    async fn refuses_deactivated_employee() {
        let test = TestBuilder::new().with_company_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let company = create_company(db).await.unwrap();
        let teacher = create_teacher(db).await.unwrap();
        let course = create_course(db, teacher.id).await.unwrap();
        let purchase = CompanyPurchaseFactory::new(db, company.id, course.id)
            .build()
            .await
            .unwrap();
        let employee = EmployeeFactory::new(db, company.id)
            .active(false)
            .build()
            .await
            .unwrap();

        let result = CompanyPurchaseService::new(db)
            .assign(company.id, purchase.id, employee.id)
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests cross-company isolation on assignment.
    ///
    /// A company can neither use another company's purchase nor assign
    /// another company's employee.
    ///
    /// Expected: Ok(None) in both directions
    #[tokio::test]
    async fn refuses_cross_company_assignment() {
        let test = TestBuilder::new().with_company_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let acme = create_company(db).await.unwrap();
        let globex = create_company(db).await.unwrap();
        let teacher = create_teacher(db).await.unwrap();
        let course = create_course(db, teacher.id).await.unwrap();
        let purchase = CompanyPurchaseFactory::new(db, acme.id, course.id)
            .build()
            .await
            .unwrap();
        let acme_employee = create_employee(db, acme.id).await.unwrap();
        let globex_employee = create_employee(db, globex.id).await.unwrap();

        let service = CompanyPurchaseService::new(db);

        let foreign_purchase = service
            .assign(globex.id, purchase.id, globex_employee.id)
            .await
            .unwrap();
        assert!(foreign_purchase.is_none());

        let foreign_employee = service
            .assign(acme.id, purchase.id, globex_employee.id)
            .await
            .unwrap();
        assert!(foreign_employee.is_none());

        // The rightful pairing still works
        let ok = service
            .assign(acme.id, purchase.id, acme_employee.id)
            .await
            .unwrap();
        assert!(ok.is_some());
    }

    /// Tests releasing an assigned seat.
    ///
    /// Expected: Ok(true) with the seat counter back down and the
    /// assignment gone
    #[tokio::test]
    async fn releases_assigned_seat() {
        let test = TestBuilder::new().with_company_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let company = create_company(db).await.unwrap();
        let teacher = create_teacher(db).await.unwrap();
        let course = create_course(db, teacher.id).await.unwrap();
        let purchase = CompanyPurchaseFactory::new(db, company.id, course.id)
            .build()
            .await
            .unwrap();
        let employee = create_employee(db, company.id).await.unwrap();

        let service = CompanyPurchaseService::new(db);
        service
            .assign(company.id, purchase.id, employee.id)
            .await
            .unwrap();

        assert!(service
            .release(company.id, purchase.id, employee.id)
            .await
            .unwrap());

        let repo = PurchaseRepository::new(db);
        let reloaded = repo.get_by_id(purchase.id).await.unwrap().unwrap();
        assert_eq!(reloaded.seats_used, 0);
        assert!(!repo
            .assignment_exists(purchase.id, employee.id)
            .await
            .unwrap());
    }
}
