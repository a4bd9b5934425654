use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::company_purchase::CompanyPurchaseFactory;
use test_utils::factory::course::create_course;
use test_utils::factory::employee::create_employee;
use test_utils::factory::user::{create_company, create_teacher};

use crate::server::data::purchase::PurchaseRepository;

mod assignments;
mod checkout_status;
mod release_seat;
mod try_claim_seat;
