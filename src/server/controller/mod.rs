//! HTTP request handlers.
//!
//! Controllers extract request parameters, run the auth guard, call one
//! service method, and convert the result to a DTO response. No business
//! logic lives here.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod comment;
pub mod company;
pub mod course;
pub mod media;
pub mod order;
pub mod subscription;
pub mod wallet;
pub mod wishlist;

use serde::Deserialize;

/// Common pagination query parameters.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}
