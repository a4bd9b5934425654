//! Business logic orchestration between controllers and the data layer.
//!
//! Services work with domain models, instantiate the repositories they need
//! per call, and map guard failures onto domain error enums. External
//! integrations (hosted checkout, upload signing) live here too.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod comment;
pub mod course;
pub mod employee;
pub mod media;
pub mod order;
pub mod purchase;
pub mod subscription;
pub mod user;
pub mod wallet;
pub mod wishlist;
