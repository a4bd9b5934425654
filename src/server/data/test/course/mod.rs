use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::course::CourseFactory;
use test_utils::factory::user::create_teacher;

use crate::server::data::course::CourseRepository;
use crate::server::model::course::CreateCourseParam;

mod create;
mod get_published_paginated;
mod set_published;
