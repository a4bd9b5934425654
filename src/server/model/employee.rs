//! Employee domain models and parameters.

use crate::model::company::{EmployeeDetailDto, EmployeeDto, PaginatedEmployeesDto};

/// Paginated employee roster for a company.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedEmployees {
    pub employees: Vec<entity::employee::Model>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedEmployees {
    pub fn into_dto(self) -> PaginatedEmployeesDto {
        PaginatedEmployeesDto {
            employees: self
                .employees
                .into_iter()
                .map(EmployeeDto::from_entity)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// An employee together with the courses assigned to them.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetail {
    pub employee: entity::employee::Model,
    pub assigned_course_ids: Vec<i32>,
}

impl EmployeeDetail {
    pub fn into_dto(self) -> EmployeeDetailDto {
        EmployeeDetailDto {
            employee: EmployeeDto::from_entity(self.employee),
            assigned_course_ids: self.assigned_course_ids,
        }
    }
}

/// Parameters for adding an employee to a company roster.
#[derive(Debug, Clone)]
pub struct CreateEmployeeParam {
    pub company_id: i32,
    pub name: String,
    pub email: String,
}

/// Parameters for replacing an employee's editable fields.
#[derive(Debug, Clone)]
pub struct UpdateEmployeeParam {
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    pub email: String,
    pub is_active: bool,
}
