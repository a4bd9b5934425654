//! Cart domain models and parameters.

use crate::model::cart::{CartDto, CartItemDto};

/// One cart line joined with its course title.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: entity::cart_item::Model,
    pub course_title: String,
}

impl CartLine {
    /// Line total is seats times the unit price captured when the line was
    /// last touched, not the course's current price.
    pub fn line_total_cents(&self) -> i64 {
        self.item.unit_price_cents * self.item.seats as i64
    }

    pub fn into_dto(self) -> CartItemDto {
        let line_total_cents = self.line_total_cents();
        CartItemDto {
            id: self.item.id,
            course_id: self.item.course_id,
            course_title: self.course_title,
            seats: self.item.seats,
            unit_price_cents: self.item.unit_price_cents,
            line_total_cents,
        }
    }
}

/// A user's full cart with its grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn total_cents(&self) -> i64 {
        self.lines.iter().map(|l| l.line_total_cents()).sum()
    }

    pub fn into_dto(self) -> CartDto {
        let total_cents = self.total_cents();
        CartDto {
            items: self.lines.into_iter().map(|l| l.into_dto()).collect(),
            total_cents,
        }
    }
}

/// Parameters for adding a course to a cart.
#[derive(Debug, Clone)]
pub struct AddCartItemParam {
    pub owner_id: i32,
    pub course_id: i32,
    pub seats: i32,
}
