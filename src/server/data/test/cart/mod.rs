use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::course::CourseFactory;
use test_utils::factory::user::{create_student, create_teacher};

use crate::server::data::cart::CartRepository;
use crate::server::model::cart::AddCartItemParam;

mod clear;
mod remove;
mod upsert_line;
