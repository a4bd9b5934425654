use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::user::create_student;
use test_utils::factory::wallet::create_wallet;

use crate::server::data::wallet::WalletRepository;

mod credit;
mod debit;
mod transactions;
