use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub course_id: i32,
    pub course_title: String,
    pub amount_cents: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedOrdersDto {
    pub orders: Vec<OrderDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Result of checking out the cart with wallet funds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlaceOrderResultDto {
    pub orders: Vec<OrderDto>,
    pub total_cents: i64,
}

/// Aggregated view for the student landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDashboardDto {
    pub orders_placed: u64,
    pub total_spent_cents: i64,
    pub wallet_balance_cents: i64,
    pub wishlist_count: u64,
    pub recent_orders: Vec<OrderDto>,
}
