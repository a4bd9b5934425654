use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::employee::{create_employee, EmployeeFactory};
use test_utils::factory::user::create_company;

use crate::server::data::employee::EmployeeRepository;

mod find_by_company_and_email;
mod get_by_company_paginated;
