use sea_orm::DatabaseConnection;

use crate::server::{
    data::{employee::EmployeeRepository, purchase::PurchaseRepository},
    error::AppError,
    model::employee::{
        CreateEmployeeParam, EmployeeDetail, PaginatedEmployees, UpdateEmployeeParam,
    },
};

pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an employee to the company roster.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created employee
    /// - `Err(AppError::BadRequest)` - Email already on this company's roster
    pub async fn create(
        &self,
        param: CreateEmployeeParam,
    ) -> Result<entity::employee::Model, AppError> {
        let repo = EmployeeRepository::new(self.db);

        if repo
            .find_by_company_and_email(param.company_id, &param.email)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "An employee with this email already exists".to_string(),
            ));
        }

        Ok(repo.create(param).await?)
    }

    /// Replaces an employee's editable fields.
    /// Returns None if the employee doesn't exist or belongs to another company
    pub async fn update(
        &self,
        param: UpdateEmployeeParam,
    ) -> Result<Option<entity::employee::Model>, AppError> {
        let repo = EmployeeRepository::new(self.db);

        let Some(existing) = repo.get_by_id(param.id).await? else {
            return Ok(None);
        };
        if existing.company_id != param.company_id {
            return Ok(None);
        }

        // The roster email stays unique, ignoring the row being updated
        if let Some(other) = repo
            .find_by_company_and_email(param.company_id, &param.email)
            .await?
        {
            if other.id != param.id {
                return Err(AppError::BadRequest(
                    "An employee with this email already exists".to_string(),
                ));
            }
        }

        let employee = repo.update(param).await?;
        Ok(Some(employee))
    }

    /// Removes an employee from the roster.
    /// Returns false if the employee doesn't exist or belongs to another company
    pub async fn delete(&self, employee_id: i32, company_id: i32) -> Result<bool, AppError> {
        let repo = EmployeeRepository::new(self.db);

        let Some(employee) = repo.get_by_id(employee_id).await? else {
            return Ok(false);
        };
        if employee.company_id != company_id {
            return Ok(false);
        }

        repo.delete(employee_id).await?;
        Ok(true)
    }

    /// Gets the company roster with pagination.
    ///
    /// One service call returns the page and the total, so the controller
    /// renders rows and pager from a single response.
    pub async fn get_paginated(
        &self,
        company_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedEmployees, AppError> {
        let repo = EmployeeRepository::new(self.db);

        let (employees, total) = repo
            .get_by_company_paginated(company_id, page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedEmployees {
            employees,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets one employee with the course ids assigned to them.
    /// Returns None if the employee doesn't exist or belongs to another company
    pub async fn get_detail(
        &self,
        employee_id: i32,
        company_id: i32,
    ) -> Result<Option<EmployeeDetail>, AppError> {
        let repo = EmployeeRepository::new(self.db);
        let purchase_repo = PurchaseRepository::new(self.db);

        let Some(employee) = repo.get_by_id(employee_id).await? else {
            return Ok(None);
        };
        if employee.company_id != company_id {
            return Ok(None);
        }

        let assignments = purchase_repo
            .get_assignments_for_employee(employee_id)
            .await?;
        let purchase_ids: Vec<i32> = assignments.iter().map(|a| a.purchase_id).collect();
        let purchases = purchase_repo.get_by_ids(&purchase_ids).await?;
        let assigned_course_ids = purchases.into_iter().map(|p| p.course_id).collect();

        Ok(Some(EmployeeDetail {
            employee,
            assigned_course_ids,
        }))
    }
}
