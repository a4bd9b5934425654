use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::comment::{create_comment, create_reply};
use test_utils::factory::course::create_course;
use test_utils::factory::user::{create_student, create_teacher};

use crate::server::data::comment::CommentRepository;

mod threads;
mod toggle_reaction;

fn comment_tables() -> TestBuilder {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Course)
        .with_table(entity::prelude::Comment)
        .with_table(entity::prelude::CommentReaction)
}
