use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::user::{create_admin, create_student, create_teacher, UserFactory};

use crate::server::data::user::UserRepository;
use crate::server::model::user::Role;

mod admin_exists;
mod create;
mod get_all_paginated;
mod set_blocked;
