use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::course::CourseFactory;
use test_utils::factory::user::{create_student, create_teacher};

use crate::server::data::order::{OrderRepository, ORDER_STATUS_COMPLETED};

mod create;
mod get_paginated_by_student;
