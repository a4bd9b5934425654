//! Wishlist domain models.

use crate::model::wishlist::WishlistItemDto;

/// A wishlist row joined with its course.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistEntry {
    pub item: entity::wishlist_item::Model,
    pub course: entity::course::Model,
}

impl WishlistEntry {
    pub fn into_dto(self) -> WishlistItemDto {
        WishlistItemDto {
            course_id: self.course.id,
            course_title: self.course.title,
            price_cents: self.course.price_cents,
            added_at: self.item.created_at,
        }
    }
}
