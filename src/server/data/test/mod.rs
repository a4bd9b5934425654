mod cart;
mod comment;
mod course;
mod employee;
mod order;
mod purchase;
mod subscription;
mod user;
mod wallet;
mod wishlist;
