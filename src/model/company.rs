use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEmployeeDto {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateEmployeeDto {
    pub name: String,
    pub email: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl EmployeeDto {
    /// Maps an employee row into its response shape.
    pub fn from_entity(entity: entity::employee::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedEmployeesDto {
    pub employees: Vec<EmployeeDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssignmentDto {
    pub id: i32,
    pub employee_id: i32,
    pub employee_name: String,
    pub assigned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeDetailDto {
    pub employee: EmployeeDto,
    pub assigned_course_ids: Vec<i32>,
}

/// Payload for starting a hosted-checkout seat purchase.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StartPurchaseDto {
    pub course_id: i32,
    pub seats: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PurchaseDto {
    pub id: i32,
    pub course_id: i32,
    pub course_title: String,
    pub seats_purchased: i32,
    pub seats_used: i32,
    pub checkout_status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StartPurchaseResultDto {
    pub purchase: PurchaseDto,
    pub checkout_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedPurchasesDto {
    pub purchases: Vec<PurchaseDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Payload for assigning or releasing a purchased seat.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignSeatDto {
    pub employee_id: i32,
}
