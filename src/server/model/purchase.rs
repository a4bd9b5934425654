//! Company purchase domain models and parameters.

use crate::model::company::{
    AssignmentDto, PaginatedPurchasesDto, PurchaseDto, StartPurchaseResultDto,
};

/// A seat-license purchase joined with its course title.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub purchase: entity::company_purchase::Model,
    pub course_title: String,
}

impl Purchase {
    pub fn into_dto(self) -> PurchaseDto {
        PurchaseDto {
            id: self.purchase.id,
            course_id: self.purchase.course_id,
            course_title: self.course_title,
            seats_purchased: self.purchase.seats_purchased,
            seats_used: self.purchase.seats_used,
            checkout_status: self.purchase.checkout_status,
            created_at: self.purchase.created_at,
        }
    }
}

/// Paginated purchase history for a company.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPurchases {
    pub purchases: Vec<Purchase>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedPurchases {
    pub fn into_dto(self) -> PaginatedPurchasesDto {
        PaginatedPurchasesDto {
            purchases: self.purchases.into_iter().map(|p| p.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// A freshly created purchase with the provider redirect URL.
#[derive(Debug, Clone, PartialEq)]
pub struct StartedPurchase {
    pub purchase: Purchase,
    pub checkout_url: String,
}

impl StartedPurchase {
    pub fn into_dto(self) -> StartPurchaseResultDto {
        StartPurchaseResultDto {
            purchase: self.purchase.into_dto(),
            checkout_url: self.checkout_url,
        }
    }
}

/// A seat assignment joined with the employee's name.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub assignment: entity::course_assignment::Model,
    pub employee_name: String,
}

impl Assignment {
    pub fn into_dto(self) -> AssignmentDto {
        AssignmentDto {
            id: self.assignment.id,
            employee_id: self.assignment.employee_id,
            employee_name: self.employee_name,
            assigned_at: self.assignment.assigned_at,
        }
    }
}

/// Parameters for starting a hosted-checkout purchase.
#[derive(Debug, Clone)]
pub struct StartPurchaseParam {
    pub company_id: i32,
    pub course_id: i32,
    pub seats: i32,
}
