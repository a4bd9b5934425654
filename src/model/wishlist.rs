use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WishlistItemDto {
    pub course_id: i32,
    pub course_title: String,
    pub price_cents: i64,
    pub added_at: DateTime<Utc>,
}

/// Result of a wishlist toggle: whether the course is in the wishlist after
/// the operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WishlistToggleDto {
    pub course_id: i32,
    pub in_wishlist: bool,
}
