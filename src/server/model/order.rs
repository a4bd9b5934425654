//! Order domain models, including the student dashboard aggregate.

use crate::model::order::{
    OrderDto, PaginatedOrdersDto, PlaceOrderResultDto, StudentDashboardDto,
};

/// An order joined with its course title.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order: entity::order::Model,
    pub course_title: String,
}

impl Order {
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.order.id,
            course_id: self.order.course_id,
            course_title: self.course_title,
            amount_cents: self.order.amount_cents,
            status: self.order.status,
            created_at: self.order.created_at,
        }
    }
}

/// Paginated order history, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedOrders {
    pub orders: Vec<Order>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedOrders {
    pub fn into_dto(self) -> PaginatedOrdersDto {
        PaginatedOrdersDto {
            orders: self.orders.into_iter().map(|o| o.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Orders written by one cart checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrders {
    pub orders: Vec<Order>,
    pub total_cents: i64,
}

impl PlacedOrders {
    pub fn into_dto(self) -> PlaceOrderResultDto {
        PlaceOrderResultDto {
            orders: self.orders.into_iter().map(|o| o.into_dto()).collect(),
            total_cents: self.total_cents,
        }
    }
}

/// Aggregates shown on the student landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDashboard {
    pub orders_placed: u64,
    pub total_spent_cents: i64,
    pub wallet_balance_cents: i64,
    pub wishlist_count: u64,
    pub recent_orders: Vec<Order>,
}

impl StudentDashboard {
    pub fn into_dto(self) -> StudentDashboardDto {
        StudentDashboardDto {
            orders_placed: self.orders_placed,
            total_spent_cents: self.total_spent_cents,
            wallet_balance_cents: self.wallet_balance_cents,
            wishlist_count: self.wishlist_count,
            recent_orders: self
                .recent_orders
                .into_iter()
                .map(|o| o.into_dto())
                .collect(),
        }
    }
}
