use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::course::create_course;
use test_utils::factory::user::{create_student, create_teacher};

use crate::server::data::wishlist::WishlistRepository;

mod toggle;
