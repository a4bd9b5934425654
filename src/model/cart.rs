use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload for adding a course to the cart.
///
/// `seats` defaults to 1 and is only meaningful for company accounts buying
/// licenses in bulk.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddCartItemDto {
    pub course_id: i32,
    #[serde(default = "default_seats")]
    pub seats: i32,
}

fn default_seats() -> i32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartItemDto {
    pub id: i32,
    pub course_id: i32,
    pub course_title: String,
    pub seats: i32,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartDto {
    pub items: Vec<CartItemDto>,
    pub total_cents: i64,
}
